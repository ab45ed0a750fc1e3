//! Market selectors for every vertical the dashboard covers.
//!
//! Each selector knows its wire code (as used in paths and query strings)
//! and the Korean label shown on the market tabs.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A market code that does not belong to the selector it was parsed for.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {selector} code: {code}")]
pub struct ParseMarketError {
    /// Name of the selector type
    pub selector: &'static str,
    /// The rejected input
    pub code: String,
}

macro_rules! market_selector {
    (
        $(#[$meta:meta])*
        $name:ident as $selector:literal {
            $($variant:ident => ($code:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every selector value, in tab order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Code used on the wire.
            pub fn code(&self) -> &'static str {
                match self {
                    $($name::$variant => $code),+
                }
            }

            /// Display label.
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.code())
            }
        }

        impl FromStr for $name {
            type Err = ParseMarketError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let code = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|m| m.code().eq_ignore_ascii_case(code))
                    .ok_or_else(|| ParseMarketError {
                        selector: $selector,
                        code: s.to_string(),
                    })
            }
        }
    };
}

market_selector! {
    /// Index series served by `/market-data`.
    IndexMarket as "index market" {
        Kospi => ("KOSPI", "KOSPI 시리즈"),
        Krx => ("KRX", "KRX 시리즈"),
    }
}

market_selector! {
    /// Equity boards served by `/stock-data`.
    StockMarket as "stock market" {
        Kospi => ("KOSPI", "KOSPI"),
        Kosdaq => ("KOSDAQ", "KOSDAQ"),
        Konex => ("KONEX", "KONEX"),
    }
}

market_selector! {
    /// Bond segments served by `/bond/trading-info/{code}`.
    BondMarket as "bond market" {
        Treasury => ("TREASURY", "국채전문"),
        General => ("GENERAL", "일반채권"),
        Small => ("SMALL", "소액채권"),
    }
}

market_selector! {
    /// Futures and options segments served by `/derivatives/trading-info/{code}`.
    DerivativeMarket as "derivative market" {
        FutNormal => ("FUT_NORMAL", "주식선물 외"),
        FutStkKospi => ("FUT_STK_KOSPI", "주식선물 (유가)"),
        FutStkKosdaq => ("FUT_STK_KOSDAQ", "주식선물 (코스닥)"),
        OptNormal => ("OPT_NORMAL", "주식옵션 외"),
        OptStkKospi => ("OPT_STK_KOSPI", "주식옵션 (유가)"),
        OptStkKosdaq => ("OPT_STK_KOSDAQ", "주식옵션 (코스닥)"),
    }
}

market_selector! {
    /// Exchange-traded products served by `/{etf|etn|elw}/trading-info`.
    ProductKind as "product kind" {
        Etf => ("ETF", "ETF"),
        Etn => ("ETN", "ETN"),
        Elw => ("ELW", "ELW"),
    }
}

market_selector! {
    /// General commodity markets served by `/commodities/trading-info/{code}`.
    CommodityMarket as "commodity market" {
        Gold => ("GOLD", "금시장"),
        Oil => ("OIL", "석유시장"),
        Ets => ("ETS", "배출권시장"),
    }
}

market_selector! {
    /// FSC quotation feeds served by `/stock-quotation/{code}`.
    QuotationFeed as "quotation feed" {
        Price => ("price", "주식시세"),
        NewShare => ("new-share", "신주인수권증서시세"),
        Beneficiary => ("beneficiary", "수익증권시세"),
        SubscriptionRight => ("subscription-right", "신주인수권증권시세"),
    }
}

impl DerivativeMarket {
    /// Options segments show implied volatility instead of the spot price.
    pub fn is_option(&self) -> bool {
        matches!(
            self,
            DerivativeMarket::OptNormal
                | DerivativeMarket::OptStkKospi
                | DerivativeMarket::OptStkKosdaq
        )
    }

    /// The segment that replaces this one when switching between the
    /// futures and options groups.
    pub fn group_default(options: bool) -> Self {
        if options {
            DerivativeMarket::OptNormal
        } else {
            DerivativeMarket::FutNormal
        }
    }
}

impl ProductKind {
    /// Lower-case path segment (`/etf/trading-info`).
    pub fn path_segment(&self) -> &'static str {
        match self {
            ProductKind::Etf => "etf",
            ProductKind::Etn => "etn",
            ProductKind::Elw => "elw",
        }
    }
}
