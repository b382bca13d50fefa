use owo_colors::{OwoColorize, Stream};

use super::{Contact, Event, LogItem, Order};

fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

/// FullContact allows to display all contact details when [std::fmt::Display]ing it.
pub struct FullContact<'a>(pub &'a Contact);

impl std::fmt::Display for FullContact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let FullContact(contact) = self;
        writeln!(
            f,
            "ID: {}",
            contact
                .id
                .unwrap_or_default()
                .if_supports_color(Stream::Stdout, |text| text.bright_yellow())
        )?;
        write!(f, "Name: {}", TableContact(contact))?;
        if let Some(email) = &contact.email {
            write!(f, "\nEmail: {email}")?;
        }
        if let Some(company) = &contact.company {
            write!(f, "\nCompany: {company}")?;
        }
        if let Some(birthdate) = &contact.birthdate {
            write!(f, "\nBirthdate: {}", birthdate.datetime().format("%Y-%m-%d"))?;
        }
        for address in contact.addresses.iter().flatten() {
            write!(
                f,
                "\nAddress ({}): {} {}, {} {}",
                or_dash(address.type_name.as_deref()),
                or_dash(address.street1.as_deref()),
                address.street2.as_deref().unwrap_or_default(),
                or_dash(address.zip.as_deref()),
                or_dash(address.city.as_deref()),
            )?;
        }
        for phone in contact.phonenumbers.iter().flatten() {
            write!(
                f,
                "\nPhone ({}): {}",
                or_dash(phone.type_name.as_deref()),
                or_dash(phone.number.as_deref())
            )?;
        }
        for (key, value) in contact.custom_fields.iter() {
            write!(
                f,
                "\n{}: {value}",
                key.if_supports_color(Stream::Stdout, |text| text.cyan())
            )?;
        }
        Ok(())
    }
}

/// Used to display a contact as an item in a list.
pub struct TableContact<'a>(pub &'a Contact);

impl std::fmt::Display for TableContact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let contact = self.0;
        let name = [&contact.firstname, &contact.middlename, &contact.lastname]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ");
        if name.is_empty() {
            write!(f, "{}", or_dash(contact.company.as_deref()))
        } else {
            write!(f, "{name}")
        }
    }
}

/// FullEvent displays the details of an event.
pub struct FullEvent<'a>(pub &'a Event);

impl std::fmt::Display for FullEvent<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let FullEvent(event) = self;
        writeln!(
            f,
            "ID: {}",
            event
                .id
                .unwrap_or_default()
                .if_supports_color(Stream::Stdout, |text| text.bright_yellow())
        )?;
        write!(f, "Name: {}", or_dash(event.name.as_deref()))?;
        if let Some(subtitle) = &event.subtitle {
            write!(f, "\nSubtitle: {subtitle}")?;
        }
        if let Some(start) = &event.startts {
            write!(f, "\nStart: {start}")?;
        }
        if let Some(end) = &event.endts {
            write!(f, "\nEnd: {end}")?;
        }
        if let Some(location) = &event.locationname {
            write!(f, "\nLocation: {location}")?;
        }
        for (key, value) in event.custom_fields.iter() {
            write!(
                f,
                "\n{}: {value}",
                key.if_supports_color(Stream::Stdout, |text| text.cyan())
            )?;
        }
        Ok(())
    }
}

/// Used to display an event as an item in a list.
pub struct TableEvent<'a>(pub &'a Event);

impl std::fmt::Display for TableEvent<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let event = self.0;
        write!(
            f,
            "{} {}",
            event
                .id
                .unwrap_or_default()
                .if_supports_color(Stream::Stdout, |text| text.bright_yellow()),
            or_dash(event.name.as_deref()),
        )?;
        if let Some(start) = &event.startts {
            write!(
                f,
                " {}",
                start.if_supports_color(Stream::Stdout, |text| text.bright_green())
            )?;
        }
        Ok(())
    }
}

/// FullOrder displays an order with its tickets.
pub struct FullOrder<'a>(pub &'a Order);

impl std::fmt::Display for FullOrder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let FullOrder(order) = self;
        writeln!(
            f,
            "ID: {}",
            order
                .orderid
                .unwrap_or_default()
                .if_supports_color(Stream::Stdout, |text| text.bright_yellow())
        )?;
        write!(f, "Code: {}", or_dash(order.code.as_deref()))?;
        if let Some(status) = &order.status {
            write!(f, "\nStatus: {status:?}")?;
        }
        if let Some(customer) = &order.customerid {
            write!(f, "\nCustomer: {customer}")?;
        }
        write!(
            f,
            "\nTotal: {:.2} (paid {:.2})",
            order.totalamount.unwrap_or_default(),
            order.amountpaid.unwrap_or_default()
        )?;
        if let Some(status) = &order.paymentstatus {
            write!(f, "\nPayment: {status:?}")?;
        }
        if let Some(status) = &order.deliverystatus {
            write!(f, "\nDelivery: {status:?}")?;
        }
        let tickets = order.tickets.as_deref().unwrap_or_default();
        write!(f, "\nTickets: {}", tickets.len())?;
        for ticket in tickets {
            write!(
                f,
                "\n  {} event {} {:.2}",
                ticket
                    .id
                    .unwrap_or_default()
                    .if_supports_color(Stream::Stdout, |text| text.bright_yellow()),
                ticket.eventid.unwrap_or_default(),
                ticket.price.unwrap_or_default(),
            )?;
        }
        Ok(())
    }
}

/// Used to display a single line of an order's history.
pub struct TableLogItem<'a>(pub &'a LogItem);

impl std::fmt::Display for TableLogItem<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let item = self.0;
        let ts = item.ts.map(|ts| ts.to_string()).unwrap_or_default();
        write!(
            f,
            "{} {} type {}",
            ts.if_supports_color(Stream::Stdout, |text| text.bright_green()),
            or_dash(item.username.as_deref()),
            item.typeid.unwrap_or_default(),
        )
    }
}
