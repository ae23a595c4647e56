// Plain-text rendering of the upcoming-events view for the terminal.
use crate::projector::{EmptyNotice, EventCard, EventListView};
use std::fmt::{self, Write};

const CARD_INDENT: &str = "        ";

fn render_card(out: &mut String, card: &EventCard<'_>) -> fmt::Result {
    // Even cards sit on the right side of the timeline.
    let indent = if card.is_even { CARD_INDENT } else { "" };
    let ev = card.event;

    writeln!(out, "{}● {}", indent, ev.title)?;
    writeln!(out, "{}  {}", indent, ev.date)?;
    for line in [&ev.location, &ev.formatted_details, &ev.to] {
        if !line.is_empty() {
            writeln!(out, "{}  {}", indent, line)?;
        }
    }
    Ok(())
}

fn render_notice(out: &mut String, notice: &EmptyNotice) -> fmt::Result {
    writeln!(out, "ℹ {}", notice.message)?;
    writeln!(out, "  {} <{}>", notice.link_label, notice.link)
}

pub fn render_text(view: &EventListView<'_>) -> Result<String, fmt::Error> {
    let mut out = String::new();
    match view {
        EventListView::Empty(notice) => render_notice(&mut out, notice)?,
        EventListView::List { cards, has_more } => {
            writeln!(out, "{}\n", rust_i18n::t!("upcoming_events"))?;
            for card in cards {
                render_card(&mut out, card)?;
                writeln!(out)?;
            }
            if *has_more {
                writeln!(out, "[ {} ]", rust_i18n::t!("load_more"))?;
            }
        }
    }
    Ok(out)
}

/// The visible events as a JSON array.
pub fn render_json(view: &EventListView<'_>) -> serde_json::Result<String> {
    let events: Vec<_> = match view {
        EventListView::Empty(_) => Vec::new(),
        EventListView::List { cards, .. } => cards.iter().map(|c| c.event).collect(),
    };
    serde_json::to_string_pretty(&events)
}
