// Plain-text rendering of entities for the terminal.

use std::fmt::Write;

use eventora_application::board::BoardView;
use eventora_application::queries::{Listing, Whoami};
use eventora_application::{Notice, NoticeLevel};
use eventora_domain::{Booking, Event, EventStats, Pagination, User, Vendor};

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

pub fn pagination_footer(pagination: &Pagination) -> String {
    let mut footer = format!(
        "{}  (page {}/{})",
        pagination.range_label(),
        pagination.page(),
        pagination.total_pages()
    );
    if let Some(previous) = pagination.previous() {
        let _ = write!(footer, "  prev: --page {}", previous);
    }
    if let Some(next) = pagination.next() {
        let _ = write!(footer, "  next: --page {}", next);
    }
    footer
}

pub fn event_table(view: &BoardView) -> String {
    let mut out = String::new();
    if view.events.is_empty() {
        out.push_str("No events found.\n");
    } else {
        let _ = writeln!(
            out,
            "{:<26} {:<28} {:<11} {:<10} {:<10} {:>12}",
            "ID", "TITLE", "TYPE", "DATE", "STATUS", "TOTAL"
        );
        for event in &view.events {
            let _ = writeln!(
                out,
                "{:<26} {:<28} {:<11} {:<10} {:<10} {:>12}",
                truncate(event.id.as_str(), 26),
                truncate(&event.title, 28),
                event.category.as_str(),
                event.date.format("%Y-%m-%d").to_string(),
                event.status.as_str(),
                event.total().format()
            );
        }
    }
    let _ = writeln!(out, "{}", pagination_footer(&view.pagination));
    out
}

pub fn event_detail(event: &Event) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", event.title, event.id);
    let _ = writeln!(out, "  type:      {}", event.category);
    let _ = writeln!(out, "  status:    {}", event.status);
    let when = match event.time {
        Some(time) => format!("{} {}", event.date.format("%Y-%m-%d"), time.format("%H:%M")),
        None => event.date.format("%Y-%m-%d").to_string(),
    };
    let _ = writeln!(out, "  when:      {}", when);
    let _ = writeln!(out, "  location:  {}", event.location);
    if let Some(description) = &event.description {
        let _ = writeln!(out, "  about:     {}", description);
    }
    if let Some(image) = &event.image {
        let _ = writeln!(out, "  image:     {}", image);
    }
    let _ = writeln!(out, "  base:      {:>12}", event.base_price.format());
    for item in &event.extra_items {
        let quantity = item.quantity.unwrap_or(1);
        let unit = item.unit_price.unwrap_or_default();
        let _ = writeln!(
            out,
            "  + {:<20} {:>3} x {:>10} = {:>12}",
            truncate(&item.name, 20),
            quantity,
            unit.format(),
            item.line_total().format()
        );
    }
    let _ = writeln!(out, "  total:     {:>12}", event.total().format());
    out
}

pub fn stats(stats: &EventStats) -> String {
    format!(
        "Total events:    {}\nActive events:   {}\nUpcoming events: {}\nTotal revenue:   {}\n",
        stats.total_events,
        stats.active_events,
        stats.upcoming_events,
        stats.total_revenue.format()
    )
}

pub fn vendor_table(listing: &Listing<Vendor>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<26} {:<24} {:<16} {:>12}", "ID", "NAME", "SERVICE", "FROM");
    for vendor in &listing.items {
        let price = vendor
            .starting_price
            .map(|price| price.format())
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{:<26} {:<24} {:<16} {:>12}",
            truncate(vendor.id.as_str(), 26),
            truncate(&vendor.name, 24),
            truncate(&vendor.service_type, 16),
            price
        );
    }
    let _ = writeln!(out, "{}", pagination_footer(&listing.pagination));
    out
}

pub fn user_table(listing: &Listing<User>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<26} {:<24} {:<30} {:<6}", "ID", "NAME", "EMAIL", "ROLE");
    for user in &listing.items {
        let _ = writeln!(
            out,
            "{:<26} {:<24} {:<30} {:<6}",
            truncate(user.id.as_str(), 26),
            truncate(&user.name, 24),
            truncate(&user.email, 30),
            user.role.as_str()
        );
    }
    let _ = writeln!(out, "{}", pagination_footer(&listing.pagination));
    out
}

pub fn booking_table(listing: &Listing<Booking>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<26} {:<26} {:<26} {:<10} {:>6} {:>12}",
        "ID", "EVENT", "USER", "STATUS", "GUESTS", "AMOUNT"
    );
    for booking in &listing.items {
        let amount = booking
            .amount
            .map(|amount| amount.format())
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{:<26} {:<26} {:<26} {:<10} {:>6} {:>12}",
            truncate(booking.id.as_str(), 26),
            truncate(booking.event.as_str(), 26),
            truncate(booking.user.as_str(), 26),
            booking.status.as_str(),
            booking.guests,
            amount
        );
    }
    let _ = writeln!(out, "{}", pagination_footer(&listing.pagination));
    out
}

pub fn whoami(whoami: &Whoami) -> String {
    match (&whoami.user, whoami.signed_in) {
        (Some(user), _) => format!("{} <{}> ({})\n", user.name, user.email, user.role.as_str()),
        (None, true) => "signed in (no profile stored)\n".to_string(),
        (None, false) => "not signed in\n".to_string(),
    }
}

pub fn notice(notice: &Notice) -> String {
    let tag = match notice.level {
        NoticeLevel::Success => "ok",
        NoticeLevel::Info => "info",
        NoticeLevel::Error => "error",
    };
    format!("[{}] {}", tag, notice.message)
}
