use serde::Deserialize;

use super::FieldText;

/// Daily trading summary for the gold, oil and emissions markets
/// (`/commodities/trading-info/{market}`).
///
/// Gold and emissions rows carry OHLC prices; oil rows carry weighted
/// average prices per oil type instead.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommodityTradingInfo {
    pub bas_dd: Option<FieldText>,
    pub isu_cd: Option<FieldText>,
    pub isu_nm: Option<FieldText>,
    pub acc_trdvol: Option<FieldText>,
    pub acc_trdval: Option<FieldText>,
    pub tdd_clsprc: Option<FieldText>,
    pub cmpprevdd_prc: Option<FieldText>,
    pub fluc_rt: Option<FieldText>,
    pub tdd_opnprc: Option<FieldText>,
    pub tdd_hgprc: Option<FieldText>,
    pub tdd_lwprc: Option<FieldText>,
    /// Oil type name
    pub oil_nm: Option<FieldText>,
    /// Weighted average price, competitive trades
    pub wt_avg_prc: Option<FieldText>,
    /// Weighted average price, negotiated trades
    pub wt_dis_avg_prc: Option<FieldText>,
}

record_fields!(CommodityTradingInfo {
    "basDd" => bas_dd,
    "isuCd" => isu_cd,
    "isuNm" => isu_nm,
    "accTrdvol" => acc_trdvol,
    "accTrdval" => acc_trdval,
    "tddClsprc" => tdd_clsprc,
    "cmpprevddPrc" => cmpprevdd_prc,
    "flucRt" => fluc_rt,
    "tddOpnprc" => tdd_opnprc,
    "tddHgprc" => tdd_hgprc,
    "tddLwprc" => tdd_lwprc,
    "oilNm" => oil_nm,
    "wtAvgPrc" => wt_avg_prc,
    "wtDisAvgPrc" => wt_dis_avg_prc,
});
