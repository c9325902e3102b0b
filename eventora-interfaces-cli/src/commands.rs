// Command tree
//
// Subcommands mirror the dashboard screens: auth, the event list/form, and
// the plain CRUD collections.

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};
use clap::{Args, Subcommand};

use eventora_domain::{
    Booking, BookingDraft, BookingStatus, EventCategory, EventId, EventStatus, ExtraItem, Money,
    Resource, User, UserDraft, UserId, UserRole, Vendor, VendorDraft, VendorId,
};

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in, register, sign out or show the current session
    #[command(subcommand)]
    Auth(AuthCommand),
    /// Browse and manage events
    #[command(subcommand)]
    Events(EventsCommand),
    #[command(subcommand)]
    Vendors(VendorsCommand),
    #[command(subcommand)]
    Users(UsersCommand),
    #[command(subcommand)]
    Bookings(BookingsCommand),
}

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Logout,
    Whoami,
}

#[derive(Debug, Subcommand)]
pub enum EventsCommand {
    /// One page of events, newest first
    List(ListEventsArgs),
    Show {
        id: String,
    },
    /// Totals across every event
    Stats,
    Create(EventFormArgs),
    /// Edit an event; omitted fields keep their current value
    Update {
        id: String,
        #[command(flatten)]
        form: EventFormArgs,
        /// Drop all existing extra items before adding `--extra` ones
        #[arg(long)]
        clear_extras: bool,
    },
    /// Delete an event and print the page it was listed on
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
        #[command(flatten)]
        view: ListEventsArgs,
    },
}

#[derive(Debug, Args, Default, Clone)]
pub struct ListEventsArgs {
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long = "type")]
    pub category: Option<EventCategory>,
    #[arg(long)]
    pub status: Option<EventStatus>,
}

#[derive(Debug, Args, Default, Clone)]
pub struct EventFormArgs {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long = "type")]
    pub category: Option<EventCategory>,
    /// Calendar date, YYYY-MM-DD
    #[arg(long)]
    pub date: Option<NaiveDate>,
    /// Time of day, HH:MM
    #[arg(long, value_parser = parse_time)]
    pub time: Option<NaiveTime>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Base price, e.g. 1,250.00
    #[arg(long = "price")]
    pub base_price: Option<Money>,
    #[arg(long)]
    pub status: Option<EventStatus>,
    /// Extra item as NAME:PRICE[:QTY]; repeatable
    #[arg(long = "extra", value_parser = parse_extra_item)]
    pub extras: Vec<ExtraItem>,
    /// Cover image uploaded with the form
    #[arg(long)]
    pub image: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum ResourceCommand {
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long)]
        search: Option<String>,
    },
    Show {
        id: String,
    },
    Delete {
        id: String,
        #[arg(long)]
        yes: bool,
    },
}

/// A collection subcommand with `F` as its create/update form.
#[derive(Debug)]
pub enum ResourceAction<F> {
    Browse(ResourceCommand),
    Create(F),
    Update { id: String, form: F },
}

/// Flags of a create/update form, laid over a draft.
pub trait ResourceForm: Send {
    type Resource: Resource;

    fn apply(self, draft: &mut <Self::Resource as Resource>::Draft);
}

macro_rules! collection_command {
    ($command:ident, $form:ty) => {
        #[derive(Debug, Subcommand)]
        pub enum $command {
            #[command(flatten)]
            Browse(ResourceCommand),
            Create($form),
            /// Omitted flags keep their current value
            Update {
                id: String,
                #[command(flatten)]
                form: $form,
            },
        }

        impl From<$command> for ResourceAction<$form> {
            fn from(command: $command) -> Self {
                match command {
                    $command::Browse(command) => ResourceAction::Browse(command),
                    $command::Create(form) => ResourceAction::Create(form),
                    $command::Update { id, form } => ResourceAction::Update { id, form },
                }
            }
        }
    };
}

collection_command!(VendorsCommand, VendorArgs);
collection_command!(UsersCommand, UserArgs);
collection_command!(BookingsCommand, BookingArgs);

#[derive(Debug, Args, Default, Clone)]
pub struct VendorArgs {
    #[arg(long)]
    pub name: Option<String>,
    /// Catering, Flowers, Venue...
    #[arg(long = "service")]
    pub service_type: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long = "price")]
    pub starting_price: Option<Money>,
    #[arg(long)]
    pub description: Option<String>,
}

impl ResourceForm for VendorArgs {
    type Resource = Vendor;

    fn apply(self, draft: &mut VendorDraft) {
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(service_type) = self.service_type {
            draft.service_type = service_type;
        }
        if self.email.is_some() {
            draft.email = self.email;
        }
        if self.phone.is_some() {
            draft.phone = self.phone;
        }
        if self.location.is_some() {
            draft.location = self.location;
        }
        if self.starting_price.is_some() {
            draft.starting_price = self.starting_price;
        }
        if self.description.is_some() {
            draft.description = self.description;
        }
    }
}

#[derive(Debug, Args, Default, Clone)]
pub struct UserArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub role: Option<UserRole>,
    #[arg(long)]
    pub password: Option<String>,
}

impl ResourceForm for UserArgs {
    type Resource = User;

    fn apply(self, draft: &mut UserDraft) {
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(email) = self.email {
            draft.email = email;
        }
        if let Some(role) = self.role {
            draft.role = role;
        }
        if self.password.is_some() {
            draft.password = self.password;
        }
    }
}

#[derive(Debug, Args, Default, Clone)]
pub struct BookingArgs {
    #[arg(long)]
    pub event: Option<String>,
    #[arg(long)]
    pub user: Option<String>,
    #[arg(long)]
    pub vendor: Option<String>,
    #[arg(long)]
    pub status: Option<BookingStatus>,
    #[arg(long)]
    pub guests: Option<u32>,
    #[arg(long)]
    pub amount: Option<Money>,
    #[arg(long)]
    pub notes: Option<String>,
}

impl ResourceForm for BookingArgs {
    type Resource = Booking;

    fn apply(self, draft: &mut BookingDraft) {
        if let Some(event) = self.event {
            draft.event = Some(EventId::from(event));
        }
        if let Some(user) = self.user {
            draft.user = Some(UserId::from(user));
        }
        if let Some(vendor) = self.vendor {
            draft.vendor = Some(VendorId::from(vendor));
        }
        if let Some(status) = self.status {
            draft.status = status;
        }
        if let Some(guests) = self.guests {
            draft.guests = guests;
        }
        if self.amount.is_some() {
            draft.amount = self.amount;
        }
        if self.notes.is_some() {
            draft.notes = self.notes;
        }
    }
}

pub fn parse_time(value: &str) -> Result<NaiveTime, String> {
    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| format!("invalid time '{}', expected HH:MM", value))
}

/// Parses `NAME:PRICE[:QTY]`. The quantity defaults to 1 and must be positive.
pub fn parse_extra_item(value: &str) -> Result<ExtraItem, String> {
    let mut parts = value.rsplitn(3, ':').collect::<Vec<_>>();
    parts.reverse();
    let (name, price, quantity) = match parts.as_slice() {
        [name, price] => (*name, *price, None),
        [name, price, quantity] => match quantity.trim().parse::<u32>() {
            Ok(quantity) => (*name, *price, Some(quantity)),
            // The name itself contained a colon.
            Err(_) => return parse_pair(value),
        },
        _ => return Err(format!("invalid extra item '{}', expected NAME:PRICE[:QTY]", value)),
    };
    build_extra(name, price, quantity)
}

fn parse_pair(value: &str) -> Result<ExtraItem, String> {
    match value.rsplit_once(':') {
        Some((name, price)) => build_extra(name, price, None),
        None => Err(format!("invalid extra item '{}', expected NAME:PRICE[:QTY]", value)),
    }
}

fn build_extra(name: &str, price: &str, quantity: Option<u32>) -> Result<ExtraItem, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("extra item name must not be empty".to_string());
    }
    let price: Money = price.parse().map_err(|err| format!("{}", err))?;
    if price.is_negative() {
        return Err(format!("extra item '{}' has a negative price", name));
    }
    let quantity = quantity.unwrap_or(1);
    if quantity == 0 {
        return Err(format!("extra item '{}' needs a quantity of at least 1", name));
    }
    Ok(ExtraItem::new(name, price, quantity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_item_forms() {
        let item = parse_extra_item("Chairs:10:2").expect("full");
        assert_eq!(item.name, "Chairs");
        assert_eq!(item.line_total(), Money::from_cents(2_000));

        let item = parse_extra_item("Cake:45.50").expect("default qty");
        assert_eq!(item.quantity, Some(1));

        let item = parse_extra_item("Bar: Premium:1,200").expect("colon in name");
        assert_eq!(item.name, "Bar: Premium");
        assert_eq!(item.unit_price, Some(Money::from_cents(120_000)));
    }

    #[test]
    fn extra_item_rejections() {
        assert!(parse_extra_item("Chairs").is_err());
        assert!(parse_extra_item(":10").is_err());
        assert!(parse_extra_item("Chairs:-1").is_err());
        assert!(parse_extra_item("Chairs:10:0").is_err());
        assert!(parse_extra_item("Chairs:ten").is_err());
    }

    #[test]
    fn booking_form_overlays_only_given_flags() {
        let mut draft = BookingDraft {
            event: Some(EventId::from("e1")),
            user: Some(UserId::from("u1")),
            guests: 40,
            notes: Some("vegan menu".to_string()),
            ..BookingDraft::default()
        };
        BookingArgs {
            guests: Some(55),
            status: Some(BookingStatus::Confirmed),
            ..BookingArgs::default()
        }
        .apply(&mut draft);
        assert_eq!(draft.guests, 55);
        assert_eq!(draft.status, BookingStatus::Confirmed);
        assert_eq!(draft.event, Some(EventId::from("e1")));
        assert_eq!(draft.notes.as_deref(), Some("vegan menu"));
    }

    #[test]
    fn time_accepts_minutes_and_seconds() {
        assert_eq!(parse_time("19:30"), Ok(NaiveTime::from_hms_opt(19, 30, 0).expect("time")));
        assert!(parse_time("7pm").is_err());
    }
}
