use serde::Deserialize;

use super::FieldText;

/// Daily trading summary of one bond issue (`/bond/trading-info/{market}`).
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BondTradingInfo {
    pub bas_dd: Option<FieldText>,
    pub mkt_nm: Option<FieldText>,
    pub isu_cd: Option<FieldText>,
    pub isu_nm: Option<FieldText>,
    /// Closing price
    pub clsprc: Option<FieldText>,
    pub cmpprevdd_prc: Option<FieldText>,
    /// Closing yield (%)
    pub clsprc_yd: Option<FieldText>,
    pub opnprc: Option<FieldText>,
    /// Opening yield (%)
    pub opnprc_yd: Option<FieldText>,
    pub acc_trdvol: Option<FieldText>,
    pub acc_trdval: Option<FieldText>,
    /// Maturity bucket, treasury market only
    pub bnd_exp_tp_nm: Option<FieldText>,
    /// Government bond issue type, treasury market only
    pub govbnd_isu_tp_nm: Option<FieldText>,
}

record_fields!(BondTradingInfo {
    "basDd" => bas_dd,
    "mktNm" => mkt_nm,
    "isuCd" => isu_cd,
    "isuNm" => isu_nm,
    "clsprc" => clsprc,
    "cmpprevddPrc" => cmpprevdd_prc,
    "clsprcYd" => clsprc_yd,
    "opnprc" => opnprc,
    "opnprcYd" => opnprc_yd,
    "accTrdvol" => acc_trdvol,
    "accTrdval" => acc_trdval,
    "bndExpTpNm" => bnd_exp_tp_nm,
    "govbndIsuTpNm" => govbnd_isu_tp_nm,
});
