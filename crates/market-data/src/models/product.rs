use serde::Deserialize;

use super::FieldText;

/// Daily trading summary of one ETF, ETN or ELW (`/{kind}/trading-info`).
///
/// The three product kinds share one shape; kind-specific columns are
/// simply absent for the others.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductTradingInfo {
    pub bas_dd: Option<FieldText>,
    pub isu_cd: Option<FieldText>,
    pub isu_nm: Option<FieldText>,
    pub tdd_clsprc: Option<FieldText>,
    pub cmpprevdd_prc: Option<FieldText>,
    pub fluc_rt: Option<FieldText>,
    /// Net asset value (ETF)
    pub nav: Option<FieldText>,
    /// Indicative value per security (ETN)
    pub per1secu_indic_val: Option<FieldText>,
    /// Underlying asset name (ELW)
    pub uly_nm: Option<FieldText>,
    /// Underlying price (ELW)
    pub uly_prc: Option<FieldText>,
    /// Underlying fluctuation rate (ELW)
    pub fluc_rt_uly: Option<FieldText>,
    pub tdd_opnprc: Option<FieldText>,
    pub tdd_hgprc: Option<FieldText>,
    pub tdd_lwprc: Option<FieldText>,
    pub acc_trdvol: Option<FieldText>,
    pub acc_trdval: Option<FieldText>,
    pub mktcap: Option<FieldText>,
    /// Total net assets (ETF)
    pub invstasst_netasst_totamt: Option<FieldText>,
    /// Indicative value amount (ETN)
    pub indic_val_amt: Option<FieldText>,
    pub list_shrs: Option<FieldText>,
}

record_fields!(ProductTradingInfo {
    "basDd" => bas_dd,
    "isuCd" => isu_cd,
    "isuNm" => isu_nm,
    "tddClsprc" => tdd_clsprc,
    "cmpprevddPrc" => cmpprevdd_prc,
    "flucRt" => fluc_rt,
    "nav" => nav,
    "per1secuIndicVal" => per1secu_indic_val,
    "ulyNm" => uly_nm,
    "ulyPrc" => uly_prc,
    "flucRtUly" => fluc_rt_uly,
    "tddOpnprc" => tdd_opnprc,
    "tddHgprc" => tdd_hgprc,
    "tddLwprc" => tdd_lwprc,
    "accTrdvol" => acc_trdvol,
    "accTrdval" => acc_trdval,
    "mktcap" => mktcap,
    "invstasstNetasstTotamt" => invstasst_netasst_totamt,
    "indicValAmt" => indic_val_amt,
    "listShrs" => list_shrs,
});
