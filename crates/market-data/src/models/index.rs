use serde::Deserialize;

use super::FieldText;

/// Daily close of one index in a series (`/market-data`).
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndexQuote {
    /// Base date (`YYYYMMDD`)
    pub bas_dt: Option<FieldText>,
    /// Index name
    pub idx_nm: Option<FieldText>,
    /// Closing level
    pub clpr: Option<FieldText>,
    /// Fluctuation rate versus the previous session (%)
    pub flt_rt: Option<FieldText>,
}

record_fields!(IndexQuote {
    "basDt" => bas_dt,
    "idxNm" => idx_nm,
    "clpr" => clpr,
    "fltRt" => flt_rt,
});
