use serde::Deserialize;

use super::FieldText;

/// Daily trading summary of one futures or options contract
/// (`/derivatives/trading-info/{market}`).
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DerivativeTradingInfo {
    pub bas_dd: Option<FieldText>,
    /// Product name
    pub prod_nm: Option<FieldText>,
    pub mkt_nm: Option<FieldText>,
    pub isu_cd: Option<FieldText>,
    pub isu_nm: Option<FieldText>,
    pub tdd_clsprc: Option<FieldText>,
    pub cmpprevdd_prc: Option<FieldText>,
    pub tdd_opnprc: Option<FieldText>,
    pub tdd_hgprc: Option<FieldText>,
    pub tdd_lwprc: Option<FieldText>,
    pub acc_trdvol: Option<FieldText>,
    pub acc_trdval: Option<FieldText>,
    /// Open interest
    pub acc_opnint_qty: Option<FieldText>,
    /// Underlying spot price (futures)
    pub spot_prc: Option<FieldText>,
    /// Settlement price
    pub setl_prc: Option<FieldText>,
    /// Call / put (options)
    pub rght_tp_nm: Option<FieldText>,
    /// Implied volatility (options)
    pub imp_volt: Option<FieldText>,
}

record_fields!(DerivativeTradingInfo {
    "basDd" => bas_dd,
    "prodNm" => prod_nm,
    "mktNm" => mkt_nm,
    "isuCd" => isu_cd,
    "isuNm" => isu_nm,
    "tddClsprc" => tdd_clsprc,
    "cmpprevddPrc" => cmpprevdd_prc,
    "tddOpnprc" => tdd_opnprc,
    "tddHgprc" => tdd_hgprc,
    "tddLwprc" => tdd_lwprc,
    "accTrdvol" => acc_trdvol,
    "accTrdval" => acc_trdval,
    "accOpnintQty" => acc_opnint_qty,
    "spotPrc" => spot_prc,
    "setlPrc" => setl_prc,
    "rghtTpNm" => rght_tp_nm,
    "impVolt" => imp_volt,
});
