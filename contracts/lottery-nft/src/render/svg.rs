use std::fmt::{self, Write};

use crate::LotteryTicket;

const WIDTH: u32 = 300;
const HEIGHT: u32 = 200;
const BALL_RADIUS: u32 = 22;
const BALL_SPACING: u32 = 60;
const BALL_Y: u32 = 100;

const BACKGROUND: &str = "#1f2a44";
const BALL_FILL: &str = "#f4c542";
const TEXT_FILL: &str = "#ffffff";
const STAMP_FILL: &str = "#e5484d";

pub(crate) fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

pub(crate) fn ticket_description(ticket: &LotteryTicket) -> String {
    let numbers: Vec<String> = ticket.lottery_numbers.iter().map(u8::to_string).collect();
    format!(
        "Lottery issue {} ticket with numbers {} for amount {}",
        ticket.issue_index,
        numbers.join("-"),
        ticket.amount
    )
}

/// Deterministic 300x200 ticket card: issue title, four number balls, amount line,
/// and a CLAIMED stamp once the reward has been paid out.
pub(crate) fn render_ticket_svg(token_id: &str, ticket: &LotteryTicket) -> String {
    let mut svg = String::with_capacity(1024);
    // Writing to a String cannot fail.
    write_ticket_svg(&mut svg, token_id, ticket).ok();
    svg
}

fn write_ticket_svg(svg: &mut String, token_id: &str, ticket: &LotteryTicket) -> fmt::Result {
    write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}">"#
    )?;
    write!(
        svg,
        r#"<rect width="100%" height="100%" rx="16" fill="{BACKGROUND}"/>"#
    )?;
    write!(
        svg,
        r#"<text x="20" y="36" font-family="monospace" font-size="18" fill="{TEXT_FILL}">Lottery #{}</text>"#,
        ticket.issue_index
    )?;
    write!(
        svg,
        r#"<text x="280" y="36" font-family="monospace" font-size="12" text-anchor="end" fill="{TEXT_FILL}">Ticket {}</text>"#,
        escape_xml(token_id)
    )?;

    let first_x = (WIDTH - BALL_SPACING * (ticket.lottery_numbers.len() as u32 - 1)) / 2;
    for (i, number) in ticket.lottery_numbers.iter().enumerate() {
        let cx = first_x + BALL_SPACING * i as u32;
        write!(
            svg,
            r#"<circle cx="{cx}" cy="{BALL_Y}" r="{BALL_RADIUS}" fill="{BALL_FILL}"/>"#
        )?;
        write!(
            svg,
            r#"<text x="{cx}" y="{}" font-family="monospace" font-size="20" text-anchor="middle" fill="{BACKGROUND}">{number}</text>"#,
            BALL_Y + 7
        )?;
    }

    write!(
        svg,
        r#"<text x="20" y="176" font-family="monospace" font-size="14" fill="{TEXT_FILL}">Amount: {}</text>"#,
        ticket.amount
    )?;
    if ticket.claimed {
        write!(
            svg,
            r#"<text x="280" y="176" font-family="monospace" font-size="14" text-anchor="end" fill="{STAMP_FILL}">CLAIMED</text>"#
        )?;
    }
    svg.push_str("</svg>");
    Ok(())
}
