//! FSC securities quotation feeds.
//!
//! Unlike the KRX trading-info endpoints these feeds are paginated by the
//! server: every response is an [`Envelope`] holding one page of items and
//! the total number of matching rows.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::{FieldText, QuotationFeed, Record};

/// Default page size the quotation pages request.
pub const DEFAULT_NUM_OF_ROWS: usize = 15;

/// One page of a server-paginated feed.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    #[serde(default)]
    pub items: Vec<T>,
    /// Number of rows matching the query across all pages
    #[serde(default)]
    pub total_count: usize,
    /// 1-based page number of `items`
    #[serde(default = "first_page")]
    pub page_no: usize,
    /// Requested page size
    #[serde(default = "default_rows")]
    pub num_of_rows: usize,
}

fn first_page() -> usize {
    1
}

fn default_rows() -> usize {
    DEFAULT_NUM_OF_ROWS
}

impl<T> Default for Envelope<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            page_no: first_page(),
            num_of_rows: default_rows(),
        }
    }
}

impl<T> Envelope<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Item name filter for the quotation feeds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NameFilter {
    /// `itmsNm`: exact item name
    Exact(String),
    /// `likeItmsNm`: item name contains the term
    Partial(String),
}

impl NameFilter {
    /// Builds a filter from user input; blank terms mean "no filter".
    pub fn new(term: &str, partial: bool) -> Option<Self> {
        let term = term.trim();
        if term.is_empty() {
            return None;
        }
        Some(if partial {
            NameFilter::Partial(term.to_string())
        } else {
            NameFilter::Exact(term.to_string())
        })
    }

    /// Query parameter name and value.
    pub fn param(&self) -> (&'static str, &str) {
        match self {
            NameFilter::Exact(term) => ("itmsNm", term),
            NameFilter::Partial(term) => ("likeItmsNm", term),
        }
    }

    pub fn term(&self) -> &str {
        self.param().1
    }

    pub fn is_partial(&self) -> bool {
        matches!(self, NameFilter::Partial(_))
    }
}

/// An item type served by one of the quotation feeds.
///
/// `Default` is needed to decode an [`Envelope`] whose `items` are missing.
pub trait QuotationItem: Record + DeserializeOwned + Default + Send + 'static {
    const FEED: QuotationFeed;
}

/// Daily price of one listed stock.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StockPrice {
    pub bas_dt: Option<FieldText>,
    /// Short code
    pub srt_cd: Option<FieldText>,
    pub isin_cd: Option<FieldText>,
    /// Item name
    pub itms_nm: Option<FieldText>,
    /// Market category
    pub mrkt_ctg: Option<FieldText>,
    /// Closing price
    pub clpr: Option<FieldText>,
    /// Change versus previous close
    pub vs: Option<FieldText>,
    pub flt_rt: Option<FieldText>,
    /// Opening price
    pub mkp: Option<FieldText>,
    pub hipr: Option<FieldText>,
    pub lopr: Option<FieldText>,
    /// Trading quantity
    pub trqu: Option<FieldText>,
    /// Trading value
    pub tr_prc: Option<FieldText>,
    /// Listed share count
    pub lstg_st_cnt: Option<FieldText>,
    /// Market capitalisation
    pub mrkt_tot_amt: Option<FieldText>,
}

record_fields!(StockPrice {
    "basDt" => bas_dt,
    "srtCd" => srt_cd,
    "isinCd" => isin_cd,
    "itmsNm" => itms_nm,
    "mrktCtg" => mrkt_ctg,
    "clpr" => clpr,
    "vs" => vs,
    "fltRt" => flt_rt,
    "mkp" => mkp,
    "hipr" => hipr,
    "lopr" => lopr,
    "trqu" => trqu,
    "trPrc" => tr_prc,
    "lstgStCnt" => lstg_st_cnt,
    "mrktTotAmt" => mrkt_tot_amt,
});

impl QuotationItem for StockPrice {
    const FEED: QuotationFeed = QuotationFeed::Price;
}

/// Daily price of one new share certificate.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewShareCertificate {
    pub bas_dt: Option<FieldText>,
    pub srt_cd: Option<FieldText>,
    pub isin_cd: Option<FieldText>,
    pub itms_nm: Option<FieldText>,
    pub mrkt_ctg: Option<FieldText>,
    pub clpr: Option<FieldText>,
    pub vs: Option<FieldText>,
    pub flt_rt: Option<FieldText>,
    pub mkp: Option<FieldText>,
    pub hipr: Option<FieldText>,
    pub lopr: Option<FieldText>,
    pub trqu: Option<FieldText>,
    pub tr_prc: Option<FieldText>,
    /// Listing date
    pub lst_dt: Option<FieldText>,
    /// Delisting date
    pub delst_dt: Option<FieldText>,
    /// Underlying stock short code
    pub stck_srtn_cd: Option<FieldText>,
    /// Underlying stock name
    pub stck_itms_nm: Option<FieldText>,
    /// Underlying stock closing price
    pub stck_clpr: Option<FieldText>,
}

record_fields!(NewShareCertificate {
    "basDt" => bas_dt,
    "srtCd" => srt_cd,
    "isinCd" => isin_cd,
    "itmsNm" => itms_nm,
    "mrktCtg" => mrkt_ctg,
    "clpr" => clpr,
    "vs" => vs,
    "fltRt" => flt_rt,
    "mkp" => mkp,
    "hipr" => hipr,
    "lopr" => lopr,
    "trqu" => trqu,
    "trPrc" => tr_prc,
    "lstDt" => lst_dt,
    "delstDt" => delst_dt,
    "stckSrtnCd" => stck_srtn_cd,
    "stckItmsNm" => stck_itms_nm,
    "stckClpr" => stck_clpr,
});

impl QuotationItem for NewShareCertificate {
    const FEED: QuotationFeed = QuotationFeed::NewShare;
}

/// Daily price of one beneficiary certificate.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BeneficiaryCertificate {
    pub bas_dt: Option<FieldText>,
    pub srt_cd: Option<FieldText>,
    pub isin_cd: Option<FieldText>,
    pub itms_nm: Option<FieldText>,
    pub clpr: Option<FieldText>,
    pub vs: Option<FieldText>,
    pub flt_rt: Option<FieldText>,
    pub mkp: Option<FieldText>,
    pub hipr: Option<FieldText>,
    pub lopr: Option<FieldText>,
    pub trqu: Option<FieldText>,
    pub tr_prc: Option<FieldText>,
    /// Listed unit count
    pub lst_pnt: Option<FieldText>,
    pub mrkt_tot_amt: Option<FieldText>,
}

record_fields!(BeneficiaryCertificate {
    "basDt" => bas_dt,
    "srtCd" => srt_cd,
    "isinCd" => isin_cd,
    "itmsNm" => itms_nm,
    "clpr" => clpr,
    "vs" => vs,
    "fltRt" => flt_rt,
    "mkp" => mkp,
    "hipr" => hipr,
    "lopr" => lopr,
    "trqu" => trqu,
    "trPrc" => tr_prc,
    "lstPnt" => lst_pnt,
    "mrktTotAmt" => mrkt_tot_amt,
});

impl QuotationItem for BeneficiaryCertificate {
    const FEED: QuotationFeed = QuotationFeed::Beneficiary;
}

/// Daily price of one stock subscription right (warrant).
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubscriptionRight {
    pub bas_dt: Option<FieldText>,
    pub srt_cd: Option<FieldText>,
    pub isin_cd: Option<FieldText>,
    pub itms_nm: Option<FieldText>,
    pub mrkt_ctg: Option<FieldText>,
    pub clpr: Option<FieldText>,
    pub vs: Option<FieldText>,
    pub flt_rt: Option<FieldText>,
    pub mkp: Option<FieldText>,
    pub hipr: Option<FieldText>,
    pub lopr: Option<FieldText>,
    pub trqu: Option<FieldText>,
    pub tr_prc: Option<FieldText>,
    pub lst_dt: Option<FieldText>,
    pub lst_pnt: Option<FieldText>,
    /// Exercise period start
    pub hngp_strt_dt: Option<FieldText>,
    /// Exercise period end
    pub hngp_end_dt: Option<FieldText>,
    pub stck_srtn_cd: Option<FieldText>,
    pub stck_itms_nm: Option<FieldText>,
    pub stck_clpr: Option<FieldText>,
}

record_fields!(SubscriptionRight {
    "basDt" => bas_dt,
    "srtCd" => srt_cd,
    "isinCd" => isin_cd,
    "itmsNm" => itms_nm,
    "mrktCtg" => mrkt_ctg,
    "clpr" => clpr,
    "vs" => vs,
    "fltRt" => flt_rt,
    "mkp" => mkp,
    "hipr" => hipr,
    "lopr" => lopr,
    "trqu" => trqu,
    "trPrc" => tr_prc,
    "lstDt" => lst_dt,
    "lstPnt" => lst_pnt,
    "hngpStrtDt" => hngp_strt_dt,
    "hngpEndDt" => hngp_end_dt,
    "stckSrtnCd" => stck_srtn_cd,
    "stckItmsNm" => stck_itms_nm,
    "stckClpr" => stck_clpr,
});

impl QuotationItem for SubscriptionRight {
    const FEED: QuotationFeed = QuotationFeed::SubscriptionRight;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_deserialization() {
        let json = r#"{
            "items": [{"itmsNm": "삼성전자", "clpr": "53,000", "vs": "-300", "fltRt": "-.56"}],
            "totalCount": 2871,
            "pageNo": 3,
            "numOfRows": 15
        }"#;
        let page: Envelope<StockPrice> = serde_json::from_str(json).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total_count, 2871);
        assert_eq!(page.page_no, 3);
        assert_eq!(page.items[0].field("vs"), Some("-300"));
    }

    #[test]
    fn test_envelope_missing_fields_use_defaults() {
        let page: Envelope<BeneficiaryCertificate> = serde_json::from_str("{}").unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total_count, 0);
        assert_eq!(page.page_no, 1);
        assert_eq!(page.num_of_rows, DEFAULT_NUM_OF_ROWS);
    }

    #[test]
    fn test_default_envelope_matches_empty_response() {
        let page: Envelope<NewShareCertificate> = Envelope::default();
        assert_eq!(page, serde_json::from_str("{}").unwrap());
    }

    #[test]
    fn test_name_filter_params() {
        let exact = NameFilter::new(" 삼성전자 ", false).unwrap();
        assert_eq!(exact.param(), ("itmsNm", "삼성전자"));

        let partial = NameFilter::new("삼성", true).unwrap();
        assert_eq!(partial.param(), ("likeItmsNm", "삼성"));
        assert!(partial.is_partial());

        assert!(NameFilter::new("   ", true).is_none());
    }

    #[test]
    fn test_item_feeds() {
        assert_eq!(StockPrice::FEED, QuotationFeed::Price);
        assert_eq!(SubscriptionRight::FEED.code(), "subscription-right");
    }
}
