//! Column catalog for every market vertical.
//!
//! A [`ColumnSet`] is the whole per-table configuration the generic view
//! needs: which columns to show, how to render each cell, the page size and
//! the sort applied when the table mounts.

use krx_dashboard_market_data::{
    BondMarket, CommodityMarket, DerivativeMarket, ProductKind, QuotationFeed, Record,
};

use crate::format::{format_change, format_grouped, format_in_eok, format_rate, EMPTY_CELL};
use crate::sort::SortState;

/// Page size of the KRX trading-info tables.
pub const TRADING_PAGE_SIZE: usize = 10;

/// Page size of the commodity and FSC quotation tables.
pub const FEED_PAGE_SIZE: usize = 15;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// How a cell value is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellFormat {
    /// Shown as-is
    Text,
    /// Thousands grouping
    Number,
    /// Arrow plus magnitude
    Change,
    /// Signed percentage
    Rate,
    /// Whole units of 억
    Eok,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// Wire key the cell value is read from
    pub key: &'static str,
    /// Header label
    pub label: &'static str,
    pub sortable: bool,
    pub align: Alignment,
    pub format: CellFormat,
}

impl ColumnDescriptor {
    const fn new(key: &'static str, label: &'static str, format: CellFormat) -> Self {
        let align = match format {
            CellFormat::Text => Alignment::Left,
            _ => Alignment::Right,
        };
        Self {
            key,
            label,
            sortable: true,
            align,
            format,
        }
    }

    pub const fn text(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, CellFormat::Text)
    }

    pub const fn number(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, CellFormat::Number)
    }

    pub const fn change(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, CellFormat::Change)
    }

    pub const fn rate(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, CellFormat::Rate)
    }

    pub const fn eok(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, CellFormat::Eok)
    }

    /// Rendered cell text for `record`.
    pub fn render<R: Record + ?Sized>(&self, record: &R) -> String {
        let value = record.field(self.key);
        match self.format {
            CellFormat::Text => match value.map(str::trim) {
                Some(text) if !text.is_empty() => text.to_string(),
                _ => EMPTY_CELL.to_string(),
            },
            CellFormat::Number => format_grouped(value),
            CellFormat::Change => format_change(value),
            CellFormat::Rate => format_rate(value),
            CellFormat::Eok => format_in_eok(value),
        }
    }
}

/// Per-table configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnSet {
    pub columns: &'static [ColumnDescriptor],
    pub page_size: usize,
    /// Column sorted ascending on mount, if any
    pub default_sort: Option<&'static str>,
}

impl ColumnSet {
    pub fn default_sort_state(&self) -> SortState {
        match self.default_sort {
            Some(key) => SortState::ascending(key),
            None => SortState::none(),
        }
    }

    pub fn column(&self, key: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.column(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|c| c.key)
    }
}

type C = ColumnDescriptor;

pub const INDEX_COLUMNS: ColumnSet = ColumnSet {
    columns: &[
        C::text("idxNm", "지수명"),
        C::number("clpr", "종가"),
        C::rate("fltRt", "등락률"),
    ],
    page_size: TRADING_PAGE_SIZE,
    default_sort: Some("idxNm"),
};

pub const STOCK_COLUMNS: ColumnSet = ColumnSet {
    columns: &[
        C::text("isuNm", "종목명"),
        C::number("tddClsprc", "종가"),
        C::change("cmpprevddPrc", "대비"),
        C::rate("flucRt", "등락률(%)"),
        C::number("accTrdvol", "거래량"),
        C::eok("mktcap", "시가총액(억)"),
    ],
    page_size: TRADING_PAGE_SIZE,
    default_sort: Some("isuNm"),
};

pub const BOND_COLUMNS: ColumnSet = ColumnSet {
    columns: &[
        C::text("isuNm", "종목명"),
        C::number("clsprc", "종가"),
        C::change("cmpprevddPrc", "대비"),
        C::number("clsprcYd", "수익률(%)"),
        C::number("accTrdvol", "거래량"),
        C::number("accTrdval", "거래대금"),
    ],
    page_size: TRADING_PAGE_SIZE,
    default_sort: Some("isuNm"),
};

/// Treasury bonds add the maturity bucket.
pub const TREASURY_BOND_COLUMNS: ColumnSet = ColumnSet {
    columns: &[
        C::text("isuNm", "종목명"),
        C::text("bndExpTpNm", "만기년수"),
        C::number("clsprc", "종가"),
        C::change("cmpprevddPrc", "대비"),
        C::number("clsprcYd", "수익률(%)"),
        C::number("accTrdvol", "거래량"),
        C::number("accTrdval", "거래대금"),
    ],
    page_size: TRADING_PAGE_SIZE,
    default_sort: Some("isuNm"),
};

pub const FUTURES_COLUMNS: ColumnSet = ColumnSet {
    columns: &[
        C::text("isuNm", "종목명"),
        C::number("tddClsprc", "종가"),
        C::change("cmpprevddPrc", "대비"),
        C::number("spotPrc", "현물가"),
        C::number("accTrdvol", "거래량"),
        C::number("accOpnintQty", "미결제약정"),
    ],
    page_size: TRADING_PAGE_SIZE,
    default_sort: Some("isuNm"),
};

pub const OPTIONS_COLUMNS: ColumnSet = ColumnSet {
    columns: &[
        C::text("isuNm", "종목명"),
        C::text("rghtTpNm", "권리유형"),
        C::number("tddClsprc", "종가"),
        C::change("cmpprevddPrc", "대비"),
        C::number("impVolt", "내재변동성"),
        C::number("accTrdvol", "거래량"),
        C::number("accOpnintQty", "미결제약정"),
    ],
    page_size: TRADING_PAGE_SIZE,
    default_sort: Some("isuNm"),
};

pub const ETF_COLUMNS: ColumnSet = ColumnSet {
    columns: &[
        C::text("isuNm", "종목명"),
        C::number("tddClsprc", "종가"),
        C::change("cmpprevddPrc", "대비"),
        C::rate("flucRt", "등락률(%)"),
        C::number("nav", "NAV"),
        C::number("accTrdvol", "거래량"),
        C::eok("mktcap", "시가총액(억)"),
    ],
    page_size: TRADING_PAGE_SIZE,
    default_sort: Some("isuNm"),
};

pub const ETN_COLUMNS: ColumnSet = ColumnSet {
    columns: &[
        C::text("isuNm", "종목명"),
        C::number("tddClsprc", "종가"),
        C::change("cmpprevddPrc", "대비"),
        C::rate("flucRt", "등락률(%)"),
        C::number("per1secuIndicVal", "IV"),
        C::number("accTrdvol", "거래량"),
        C::eok("mktcap", "시가총액(억)"),
    ],
    page_size: TRADING_PAGE_SIZE,
    default_sort: Some("isuNm"),
};

pub const ELW_COLUMNS: ColumnSet = ColumnSet {
    columns: &[
        C::text("isuNm", "종목명"),
        C::number("tddClsprc", "종가"),
        C::change("cmpprevddPrc", "대비"),
        C::rate("flucRt", "등락률(%)"),
        C::text("ulyNm", "기초자산"),
        C::number("ulyPrc", "기초자산가"),
        C::number("accTrdvol", "거래량"),
        C::eok("mktcap", "시가총액(억)"),
    ],
    page_size: TRADING_PAGE_SIZE,
    default_sort: Some("isuNm"),
};

pub const COMMODITY_COLUMNS: ColumnSet = ColumnSet {
    columns: &[
        C::text("isuNm", "종목명"),
        C::number("tddClsprc", "종가"),
        C::change("cmpprevddPrc", "대비"),
        C::rate("flucRt", "등락률"),
        C::number("accTrdvol", "거래량"),
        C::number("accTrdval", "거래대금"),
    ],
    page_size: FEED_PAGE_SIZE,
    default_sort: None,
};

pub const OIL_COLUMNS: ColumnSet = ColumnSet {
    columns: &[
        C::text("oilNm", "유종구분"),
        C::number("wtAvgPrc", "가중평균가(경쟁)"),
        C::number("wtDisAvgPrc", "가중평균가(협의)"),
        C::number("accTrdvol", "거래량"),
        C::number("accTrdval", "거래대금"),
    ],
    page_size: FEED_PAGE_SIZE,
    default_sort: None,
};

pub const STOCK_PRICE_COLUMNS: ColumnSet = ColumnSet {
    columns: &[
        C::text("itmsNm", "종목명"),
        C::text("mrktCtg", "시장구분"),
        C::number("clpr", "종가"),
        C::change("vs", "대비"),
        C::rate("fltRt", "등락률"),
        C::number("trqu", "거래량"),
        C::number("trPrc", "거래대금"),
        C::number("mrktTotAmt", "시가총액"),
    ],
    page_size: FEED_PAGE_SIZE,
    default_sort: None,
};

pub const NEW_SHARE_COLUMNS: ColumnSet = ColumnSet {
    columns: &[
        C::text("itmsNm", "종목명"),
        C::text("stckItmsNm", "대상주식"),
        C::number("clpr", "종가"),
        C::change("vs", "대비"),
        C::rate("fltRt", "등락률"),
        C::number("stckClpr", "대상주식 종가"),
        C::number("trqu", "거래량"),
        C::number("trPrc", "거래대금"),
    ],
    page_size: FEED_PAGE_SIZE,
    default_sort: None,
};

pub const BENEFICIARY_COLUMNS: ColumnSet = ColumnSet {
    columns: &[
        C::text("itmsNm", "종목명"),
        C::number("clpr", "종가"),
        C::change("vs", "대비"),
        C::rate("fltRt", "등락률"),
        C::number("trqu", "거래량"),
        C::number("trPrc", "거래대금"),
        C::number("mrktTotAmt", "시가총액"),
    ],
    page_size: FEED_PAGE_SIZE,
    default_sort: None,
};

pub const SUBSCRIPTION_RIGHT_COLUMNS: ColumnSet = ColumnSet {
    columns: &[
        C::text("itmsNm", "종목명"),
        C::text("stckItmsNm", "대상주식"),
        C::number("clpr", "종가"),
        C::change("vs", "대비"),
        C::rate("fltRt", "등락률"),
        C::text("hngpStrtDt", "행사시작일"),
        C::text("hngpEndDt", "행사종료일"),
        C::number("trqu", "거래량"),
    ],
    page_size: FEED_PAGE_SIZE,
    default_sort: None,
};

pub fn bond_columns(market: BondMarket) -> ColumnSet {
    match market {
        BondMarket::Treasury => TREASURY_BOND_COLUMNS,
        BondMarket::General | BondMarket::Small => BOND_COLUMNS,
    }
}

pub fn derivative_columns(market: DerivativeMarket) -> ColumnSet {
    if market.is_option() {
        OPTIONS_COLUMNS
    } else {
        FUTURES_COLUMNS
    }
}

pub fn product_columns(kind: ProductKind) -> ColumnSet {
    match kind {
        ProductKind::Etf => ETF_COLUMNS,
        ProductKind::Etn => ETN_COLUMNS,
        ProductKind::Elw => ELW_COLUMNS,
    }
}

pub fn commodity_columns(market: CommodityMarket) -> ColumnSet {
    match market {
        CommodityMarket::Oil => OIL_COLUMNS,
        CommodityMarket::Gold | CommodityMarket::Ets => COMMODITY_COLUMNS,
    }
}

pub fn quotation_columns(feed: QuotationFeed) -> ColumnSet {
    match feed {
        QuotationFeed::Price => STOCK_PRICE_COLUMNS,
        QuotationFeed::NewShare => NEW_SHARE_COLUMNS,
        QuotationFeed::Beneficiary => BENEFICIARY_COLUMNS,
        QuotationFeed::SubscriptionRight => SUBSCRIPTION_RIGHT_COLUMNS,
    }
}
