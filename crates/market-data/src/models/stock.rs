use serde::Deserialize;

use super::FieldText;

/// One listed issue's daily trading summary (`/stock-data`).
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StockTradingInfo {
    pub bas_dd: Option<FieldText>,
    /// Issue code
    pub isu_cd: Option<FieldText>,
    /// Issue name
    pub isu_nm: Option<FieldText>,
    /// Market name (KOSPI, KOSDAQ, KONEX)
    pub mkt_nm: Option<FieldText>,
    /// Section / department name
    pub sect_tp_nm: Option<FieldText>,
    /// Closing price
    pub tdd_clsprc: Option<FieldText>,
    /// Change versus previous close
    pub cmpprevdd_prc: Option<FieldText>,
    /// Fluctuation rate (%)
    pub fluc_rt: Option<FieldText>,
    pub tdd_opnprc: Option<FieldText>,
    pub tdd_hgprc: Option<FieldText>,
    pub tdd_lwprc: Option<FieldText>,
    /// Accumulated trading volume
    pub acc_trdvol: Option<FieldText>,
    /// Accumulated trading value (KRW)
    pub acc_trdval: Option<FieldText>,
    /// Market capitalisation (KRW)
    pub mktcap: Option<FieldText>,
    /// Listed shares
    pub list_shrs: Option<FieldText>,
}

record_fields!(StockTradingInfo {
    "basDd" => bas_dd,
    "isuCd" => isu_cd,
    "isuNm" => isu_nm,
    "mktNm" => mkt_nm,
    "sectTpNm" => sect_tp_nm,
    "tddClsprc" => tdd_clsprc,
    "cmpprevddPrc" => cmpprevdd_prc,
    "flucRt" => fluc_rt,
    "tddOpnprc" => tdd_opnprc,
    "tddHgprc" => tdd_hgprc,
    "tddLwprc" => tdd_lwprc,
    "accTrdvol" => acc_trdvol,
    "accTrdval" => acc_trdval,
    "mktcap" => mktcap,
    "listShrs" => list_shrs,
});
