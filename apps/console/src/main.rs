mod cli;
mod config;
mod main_lib;
mod render;

use clap::Parser;
use krx_dashboard_core::columns::CellFormat;
use krx_dashboard_core::dates::{query_date_from_input, SystemDates};
use krx_dashboard_core::query_state::QueryState;
use krx_dashboard_core::source::{
    BondSource, CommoditySource, DerivativeSource, IndexSource, ProductSource, QuotationSource,
    StockSource,
};
use krx_dashboard_core::summary::{
    IndexSummary, TradingKeys, TradingSummary, BOND_SUMMARY_KEYS, COMMODITY_SUMMARY_KEYS,
    DERIVATIVE_SUMMARY_KEYS, PRODUCT_SUMMARY_KEYS, STOCK_SUMMARY_KEYS,
};
use krx_dashboard_core::{InputError, SortState, TableController, TableSource, ViewStatus};
use krx_dashboard_market_data::models::{
    BeneficiaryCertificate, NewShareCertificate, StockPrice, SubscriptionRight,
};
use krx_dashboard_market_data::{
    BasDate, BondMarket, CommodityMarket, DerivativeMarket, IndexMarket, KrxClient, NameFilter,
    ParseMarketError, ProductKind, QuotationFeed, StockMarket,
};
use std::str::FromStr;
use tracing::{info, warn};

use crate::cli::{Cli, SortArg, Vertical};
use crate::config::Config;
use crate::main_lib::init_tracing;

/// What the user asked to see, after merging `--query` with the flags.
struct ViewRequest {
    market: Option<String>,
    date: BasDate,
    page: usize,
    sort: Option<SortArg>,
    search: Option<NameFilter>,
}

/// Which cards to show above the table.
enum Cards {
    Index { name_key: &'static str, rate_key: &'static str },
    Trading { keys: TradingKeys, extra_title: Option<&'static str> },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();
    init_tracing(&config);

    let client = KrxClient::new(config.client);
    info!("Using backend at {}", client.base_url());

    let request = resolve_request(&cli)?;
    let market = request.market.as_deref();

    match cli.vertical {
        Vertical::Index => {
            let source = IndexSource::new(client, parse_market(market, IndexMarket::Kospi)?);
            show(source, request, Cards::Index { name_key: "idxNm", rate_key: "fltRt" }).await
        }
        Vertical::Stock => {
            let source = StockSource::new(client, parse_market(market, StockMarket::Kospi)?);
            show(source, request, trading(STOCK_SUMMARY_KEYS, Some("시가총액"))).await
        }
        Vertical::Bond => {
            let source = BondSource::new(client, parse_market(market, BondMarket::Treasury)?);
            show(source, request, trading(BOND_SUMMARY_KEYS, None)).await
        }
        Vertical::Derivative => {
            let segment = parse_market(market, DerivativeMarket::FutNormal)?;
            let source = DerivativeSource::new(client, segment);
            show(source, request, trading(DERIVATIVE_SUMMARY_KEYS, Some("미결제약정"))).await
        }
        Vertical::Product => {
            let source = ProductSource::new(client, parse_market(market, ProductKind::Etf)?);
            show(source, request, trading(PRODUCT_SUMMARY_KEYS, Some("시가총액"))).await
        }
        Vertical::Commodity => {
            let source = CommoditySource::new(client, parse_market(market, CommodityMarket::Gold)?);
            show(source, request, trading(COMMODITY_SUMMARY_KEYS, None)).await
        }
        Vertical::Quotation => {
            let cards = Cards::Index { name_key: "itmsNm", rate_key: "fltRt" };
            match parse_market(market, QuotationFeed::Price)? {
                QuotationFeed::Price => {
                    show(QuotationSource::<StockPrice>::new(client), request, cards).await
                }
                QuotationFeed::NewShare => {
                    show(QuotationSource::<NewShareCertificate>::new(client), request, cards).await
                }
                QuotationFeed::Beneficiary => {
                    let source = QuotationSource::<BeneficiaryCertificate>::new(client);
                    show(source, request, cards).await
                }
                QuotationFeed::SubscriptionRight => {
                    let source = QuotationSource::<SubscriptionRight>::new(client);
                    show(source, request, cards).await
                }
            }
        }
    }
}

fn trading(keys: TradingKeys, extra_title: Option<&'static str>) -> Cards {
    Cards::Trading { keys, extra_title }
}

/// Explicit flags win over the shared query string.
fn resolve_request(cli: &Cli) -> Result<ViewRequest, InputError> {
    let shared = cli
        .query
        .as_deref()
        .map(QueryState::from_query)
        .unwrap_or_default();

    let date = match cli.date.as_deref() {
        Some(input) => query_date_from_input(input, &SystemDates)?,
        None => shared.resolve_date(&SystemDates),
    };
    let search = match cli.search.as_deref() {
        Some(term) => NameFilter::new(term, cli.partial),
        None => shared.search.clone(),
    };

    Ok(ViewRequest {
        market: cli.market.clone().or(shared.market),
        date,
        page: cli.page.unwrap_or(shared.page).max(1),
        sort: cli.sort.clone(),
        search,
    })
}

fn parse_market<M>(code: Option<&str>, default: M) -> Result<M, InputError>
where
    M: FromStr<Err = ParseMarketError>,
{
    match code {
        Some(code) => Ok(code.parse()?),
        None => Ok(default),
    }
}

/// Clicks the header until the requested column and direction are active.
fn apply_sort<S: TableSource>(controller: &mut TableController<S>, sort: &SortArg) {
    let target = SortState::new(sort.key.clone(), sort.direction);
    for _ in 0..2 {
        if controller.view().sort_state() == &target {
            return;
        }
        if !controller.sort_by(&sort.key) {
            warn!("Column '{}' is not sortable here, keeping the default order", sort.key);
            return;
        }
    }
}

async fn show<S: TableSource>(source: S, request: ViewRequest, cards: Cards) -> anyhow::Result<()> {
    let label = source.label();
    let mut controller = TableController::new(source, request.date);

    let status = controller.search(request.date, request.search.clone()).await;
    info!("Loaded {} for {}: {:?}", label, request.date, status);

    if let Some(sort) = &request.sort {
        apply_sort(&mut controller, sort);
    }
    if request.page > 1 {
        controller.go_to_page(request.page).await;
    }

    let view = controller.view();
    println!("{} / {}", label, request.date.date());

    if view.status() == ViewStatus::Populated {
        let rows = view.rows();
        let cards = match cards {
            Cards::Index { name_key, rate_key } => {
                render::index_cards(&IndexSummary::compute(rows, name_key, rate_key))
            }
            Cards::Trading { keys, extra_title } => {
                let mover_format = view
                    .columns()
                    .column(keys.mover)
                    .map(|c| c.format)
                    .unwrap_or(CellFormat::Number);
                render::trading_cards(&TradingSummary::compute(rows, &keys), mover_format, extra_title)
            }
        };
        println!("{}", render::render_cards(&cards));
    }

    println!();
    println!("{}", render::render_table(view));
    println!();
    println!("{}", render::render_pager(view));

    let state = QueryState {
        market: request.market,
        date: Some(request.date.date()),
        page: view.page(),
        search: request.search,
    };
    println!("?{}", state.to_query());

    if let ViewStatus::Failed(kind) = view.status() {
        warn!("{} could not be loaded ({})", label, kind);
    }
    Ok(())
}
