//! Checkout message formatting and the messaging handoff.
//!
//! Checkout ends with a single text blob handed to a WhatsApp deep link;
//! the restaurant reads the order straight from the chat, so the section
//! layout below is part of the contract with the kitchen.

use thiserror::Error;

use crate::cart::Cart;
use crate::types::{Address, MoneyFormat};

/// Validation failures that block checkout. Checked in order; none of them
/// mutates the cart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// Customer name is empty after trimming.
    #[error("Por favor, digite seu nome para continuarmos!")]
    MissingName,
    /// No resolved address, or the house number is empty after trimming.
    #[error("Por favor, preencha o endereço e o número da casa.")]
    MissingAddress,
}

/// Build the order message for the messaging handoff.
///
/// Sections, in fixed order: header, customer name, itemized list (cart
/// order), observations block (only when at least one line carries one),
/// total, delivery address. Formatting only proceeds once every
/// precondition passes - there is no partial output.
///
/// # Errors
///
/// [`CheckoutError::MissingName`] when the trimmed customer name is empty;
/// [`CheckoutError::MissingAddress`] when no address was resolved or the
/// trimmed house number is empty.
pub fn format_order(
    cart: &Cart,
    store_name: &str,
    customer_name: &str,
    address: Option<&Address>,
    house_number: &str,
    money: &MoneyFormat,
) -> Result<String, CheckoutError> {
    let customer_name = customer_name.trim();
    if customer_name.is_empty() {
        return Err(CheckoutError::MissingName);
    }

    let house_number = house_number.trim();
    let address = match address {
        Some(address) if !house_number.is_empty() => address,
        _ => return Err(CheckoutError::MissingAddress),
    };

    let items: Vec<String> = cart
        .lines()
        .iter()
        .map(|line| format!("▪️ {}x {}", line.quantity, line.product.name))
        .collect();

    let observations: Vec<String> = cart
        .lines()
        .iter()
        .filter_map(|line| {
            line.observation.as_ref().map(|obs| {
                format!(" item: {}x {}\n - {obs}", line.quantity, line.product.name)
            })
        })
        .collect();
    let observations_block = if observations.is_empty() {
        String::new()
    } else {
        format!("\n\n⚠️ *Observações:*\n{}", observations.join("\n"))
    };

    let address_block = format!(
        "📍 *Entrega:*\n{}, {house_number}\n{}\n{} - {}\nCEP: {}",
        address.street, address.neighborhood, address.city, address.region, address.postal_code
    );

    Ok(format!(
        "*NOVO PEDIDO - {}* 🍔\n\n\
         👤 *Cliente:* {customer_name}\n\n\
         📋 *Itens:*\n{}{observations_block}\n\n\
         💰 *Total:* {}\n\n\
         {address_block}",
        store_name.to_uppercase(),
        items.join("\n"),
        money.format(cart.total_price()),
    ))
}

/// Build the WhatsApp deep link carrying a percent-encoded order message.
///
/// Fire and forget: the system does not await delivery or confirmation.
#[must_use]
pub fn handoff_url(phone_number: &str, message: &str) -> String {
    format!(
        "https://wa.me/{phone_number}?text={}",
        urlencoding::encode(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::types::ProductId;

    fn sample_cart() -> Cart {
        let catalog = Catalog::standard();
        let mut cart = Cart::default();
        cart.add_item(
            catalog
                .product(&ProductId::new("b1"))
                .expect("known product")
                .clone(),
            2,
            Some("sem cebola"),
        )
        .expect("add");
        cart.add_item(
            catalog
                .product(&ProductId::new("d1"))
                .expect("known product")
                .clone(),
            1,
            None,
        )
        .expect("add");
        cart
    }

    fn sample_address() -> Address {
        Address {
            postal_code: "01310-100".to_owned(),
            street: "Avenida Paulista".to_owned(),
            neighborhood: "Bela Vista".to_owned(),
            city: "São Paulo".to_owned(),
            region: "SP".to_owned(),
        }
    }

    #[test]
    fn blank_name_is_rejected_even_with_a_valid_address() {
        let cart = sample_cart();
        let address = sample_address();
        let result = format_order(
            &cart,
            "Brasa Burgers",
            "   ",
            Some(&address),
            "42",
            &MoneyFormat::default(),
        );
        assert_eq!(result, Err(CheckoutError::MissingName));
    }

    #[test]
    fn unresolved_address_is_rejected_even_with_a_valid_name() {
        let cart = sample_cart();
        let result = format_order(
            &cart,
            "Brasa Burgers",
            "Maria",
            None,
            "42",
            &MoneyFormat::default(),
        );
        assert_eq!(result, Err(CheckoutError::MissingAddress));
    }

    #[test]
    fn blank_house_number_counts_as_missing_address() {
        let cart = sample_cart();
        let address = sample_address();
        let result = format_order(
            &cart,
            "Brasa Burgers",
            "Maria",
            Some(&address),
            "  ",
            &MoneyFormat::default(),
        );
        assert_eq!(result, Err(CheckoutError::MissingAddress));
    }

    #[test]
    fn message_sections_appear_in_fixed_order() {
        let cart = sample_cart();
        let address = sample_address();
        let message = format_order(
            &cart,
            "Brasa Burgers",
            "Maria",
            Some(&address),
            "42",
            &MoneyFormat::default(),
        )
        .expect("valid order");

        let expected = "*NOVO PEDIDO - BRASA BURGERS* 🍔\n\n\
                        👤 *Cliente:* Maria\n\n\
                        📋 *Itens:*\n\
                        ▪️ 2x X-Bacon do Beto\n\
                        ▪️ 1x Coca-Cola Lata\n\n\
                        ⚠️ *Observações:*\n \
                        item: 2x X-Bacon do Beto\n \
                        - sem cebola\n\n\
                        💰 *Total:* R$ 62,00\n\n\
                        📍 *Entrega:*\n\
                        Avenida Paulista, 42\n\
                        Bela Vista\n\
                        São Paulo - SP\n\
                        CEP: 01310-100";
        assert_eq!(message, expected);
    }

    #[test]
    fn observations_block_is_omitted_when_no_line_has_one() {
        let catalog = Catalog::standard();
        let mut cart = Cart::default();
        cart.add_item(
            catalog
                .product(&ProductId::new("d1"))
                .expect("known product")
                .clone(),
            1,
            Some("   "),
        )
        .expect("add");

        let address = sample_address();
        let message = format_order(
            &cart,
            "Brasa Burgers",
            "João",
            Some(&address),
            "7",
            &MoneyFormat::default(),
        )
        .expect("valid order");
        assert!(!message.contains("Observações"));
    }

    #[test]
    fn handoff_url_percent_encodes_the_message() {
        let url = handoff_url("5511973534101", "pedido: 2x burger\ntotal R$ 10,00");
        assert!(url.starts_with("https://wa.me/5511973534101?text="));
        assert!(url.contains("%0A"), "newlines are percent-encoded");
        assert!(!url.contains(' '));
    }
}
