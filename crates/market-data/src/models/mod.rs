//! Data model for the dashboard backend.
//!
//! - `record` - The [`Record`] trait every table row implements
//! - `text` - [`FieldText`], a lenient display-string field value
//! - `date` - [`BasDate`], the `YYYYMMDD` trading date
//! - `market` - Market selectors per vertical
//! - `index`, `stock`, `bond`, `derivative`, `product`, `commodity` - KRX
//!   trading-info records (full day, client-side pagination)
//! - `quotation` - FSC quotation items and the server-side pagination
//!   [`Envelope`]

#[macro_use]
mod record;

mod bond;
mod commodity;
mod date;
mod derivative;
mod index;
mod market;
mod product;
mod quotation;
mod stock;
mod text;

pub use bond::BondTradingInfo;
pub use commodity::CommodityTradingInfo;
pub use date::{BasDate, BAS_DATE_FORMAT};
pub use derivative::DerivativeTradingInfo;
pub use index::IndexQuote;
pub use market::{
    BondMarket, CommodityMarket, DerivativeMarket, IndexMarket, ParseMarketError, ProductKind,
    QuotationFeed, StockMarket,
};
pub use product::ProductTradingInfo;
pub use quotation::{
    BeneficiaryCertificate, Envelope, NameFilter, NewShareCertificate, QuotationItem,
    StockPrice, SubscriptionRight, DEFAULT_NUM_OF_ROWS,
};
pub use record::Record;
pub use stock::StockTradingInfo;
pub use text::FieldText;
