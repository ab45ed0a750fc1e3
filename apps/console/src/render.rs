//! Plain-text rendering of summary cards, the table and the page strip.

use krx_dashboard_core::columns::{Alignment, CellFormat};
use krx_dashboard_core::format::{
    format_change, format_grouped, format_in_eok, format_korean_amount, format_rate,
};
use krx_dashboard_core::summary::{Highlight, IndexSummary, TradingSummary};
use krx_dashboard_core::{PageIndicator, TableView};
use krx_dashboard_market_data::Record;
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: &str = "  ";

pub struct Card {
    pub title: String,
    pub value: String,
    pub note: String,
}

impl Card {
    fn new(title: &str, value: String, note: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            value,
            note: note.into(),
        }
    }
}

fn format_cell(value: &str, format: CellFormat) -> String {
    match format {
        CellFormat::Rate => format_rate(Some(value)),
        CellFormat::Change => format_change(Some(value)),
        CellFormat::Eok => format_in_eok(Some(value)),
        CellFormat::Number => format_grouped(Some(value)),
        CellFormat::Text => value.to_string(),
    }
}

fn highlight_card(title: &str, highlight: Option<&Highlight>, format: CellFormat) -> Card {
    match highlight {
        Some(h) => Card::new(title, h.name.clone(), format_cell(&h.value, format)),
        None => Card::new(title, "-".to_string(), ""),
    }
}

pub fn index_cards(summary: &IndexSummary) -> Vec<Card> {
    let average = summary
        .average_fluctuation
        .map(|avg| format_rate(Some(avg.round_dp(2).to_string().as_str())))
        .unwrap_or_else(|| "-".to_string());
    vec![
        Card::new("평균 등락률", average, format!("{}개 지수", summary.count)),
        highlight_card("최대 상승", summary.top_gainer.as_ref(), CellFormat::Rate),
        highlight_card("최대 하락", summary.worst_loser.as_ref(), CellFormat::Rate),
        Card::new(
            "상승 / 하락 / 보합",
            format!(
                "{} / {} / {}",
                summary.breadth.up, summary.breadth.down, summary.breadth.steady
            ),
            "",
        ),
    ]
}

/// `mover_format` is the cell format of the column the top mover was
/// ranked by.
pub fn trading_cards(
    summary: &TradingSummary,
    mover_format: CellFormat,
    extra_title: Option<&str>,
) -> Vec<Card> {
    let mut cards = vec![
        Card::new("총 거래량", format_korean_amount(summary.total_volume), "당일 기준 합계"),
        Card::new("총 거래대금", format_korean_amount(summary.total_value), "KRW 기준"),
    ];
    cards.push(highlight_card(
        "최대 상승 종목",
        summary.top_mover.as_ref(),
        mover_format,
    ));
    if let (Some(title), Some(total)) = (extra_title, summary.extra_total) {
        cards.push(Card::new(
            title,
            format_korean_amount(total),
            format!("{}개 종목 합계", summary.count),
        ));
    }
    cards
}

pub fn render_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| {
            if card.note.is_empty() {
                format!("{}: {}", card.title, card.value)
            } else {
                format!("{}: {} ({})", card.title, card.value, card.note)
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

fn pad_to_width(value: &str, width: usize, align: Alignment) -> String {
    let current = UnicodeWidthStr::width(value);
    if current >= width {
        return value.to_string();
    }
    let padding = " ".repeat(width - current);
    match align {
        Alignment::Left => format!("{value}{padding}"),
        Alignment::Right => format!("{padding}{value}"),
    }
}

pub fn render_table<R: Record>(view: &TableView<R>) -> String {
    let columns = view.columns().columns;
    let sort = view.sort_state();

    let headers: Vec<String> = std::iter::once("#".to_string())
        .chain(
            columns
                .iter()
                .map(|c| format!("{}{}", c.label, sort.indicator(c.key))),
        )
        .collect();

    let first_rank = view.first_rank();
    let body: Vec<Vec<String>> = view
        .visible_rows()
        .into_iter()
        .enumerate()
        .map(|(offset, row)| {
            std::iter::once((first_rank + offset).to_string())
                .chain(columns.iter().map(|c| c.render(row)))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = (0..headers.len())
        .map(|i| {
            body.iter()
                .map(|cells| UnicodeWidthStr::width(cells[i].as_str()))
                .chain(std::iter::once(UnicodeWidthStr::width(headers[i].as_str())))
                .max()
                .unwrap_or(0)
        })
        .collect();
    let aligns: Vec<Alignment> = std::iter::once(Alignment::Right)
        .chain(columns.iter().map(|c| c.align))
        .collect();

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| pad_to_width(cell, widths[i], aligns[i]))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP)
            .trim_end()
            .to_string()
    };

    let header = line(&headers);
    let rule = "-".repeat(UnicodeWidthStr::width(header.as_str()));
    let mut out = vec![header, rule];
    if let Some(message) = view.empty_message() {
        out.push(message.to_string());
    } else {
        out.extend(body.iter().map(|cells| line(cells)));
    }
    out.join("\n")
}

pub fn render_pager<R: Record>(view: &TableView<R>) -> String {
    let window = view.window();
    let strip = view
        .indicators()
        .into_iter()
        .map(|indicator| match indicator {
            PageIndicator::Page(n) if n == window.page => format!("[{}]", n),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ");
    let previous = if window.has_previous() { "‹" } else { " " };
    let next = if window.has_next() { "›" } else { " " };
    format!(
        "{} {} {}   {}건 중 {}-{}",
        previous,
        strip,
        next,
        view.total_count(),
        if window.is_empty() { 0 } else { window.start + 1 },
        window.end
    )
}
