//! Interactive browsing session.
//!
//! Each line typed at the prompt is one shopper action; the listing or the
//! cart is printed again after every change.

use std::str::FromStr;

use anyhow::{anyhow, bail, Context as _, Result};
use dialoguer::Input;
use storefront_core::catalog::{Category, Color};
use storefront_core::checkout::LoggingHandoff;
use storefront_core::search::Selection;
use storefront_core::{ProductId, Storefront};

use super::cart::report_add;
use crate::context::Context;

const HELP: &[(&str, &str)] = &[
    ("search <text>", "filter by name (empty clears)"),
    ("category <label|all>", "filter by category"),
    ("color <label|all>", "filter by colour"),
    ("price <min> <max>", "filter by price, inclusive"),
    ("list", "show matching products"),
    ("add <id>", "add one unit to the cart"),
    ("remove <id>", "remove a product from the cart"),
    ("qty <id> <n>", "set a quantity (0 removes)"),
    ("cart", "show the cart"),
    ("reset", "clear all filters"),
    ("clear", "empty the cart"),
    ("order", "place the order"),
    ("quit", "leave the shell"),
];

/// One shell instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Search(String),
    Category(Selection<Category>),
    Color(Selection<Color>),
    Price(u64, u64),
    List,
    Add(ProductId),
    Remove(ProductId),
    Quantity(ProductId, u32),
    Cart,
    Reset,
    Clear,
    Order,
    Help,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let mut args = rest.split_whitespace();

        let command = match verb.to_lowercase().as_str() {
            "search" | "s" => ShellCommand::Search(rest.to_string()),
            "category" | "cat" => ShellCommand::Category(rest.parse()?),
            "color" => ShellCommand::Color(rest.parse()?),
            "price" => {
                let min = number(args.next(), "min")?;
                let max = number(args.next(), "max")?;
                ShellCommand::Price(min, max)
            }
            "list" | "ls" => ShellCommand::List,
            "add" => ShellCommand::Add(product_id(args.next())?),
            "remove" | "rm" => ShellCommand::Remove(product_id(args.next())?),
            "qty" => {
                let id = product_id(args.next())?;
                let quantity = number(args.next(), "quantity")?;
                ShellCommand::Quantity(id, u32::try_from(quantity)?)
            }
            "cart" => ShellCommand::Cart,
            "reset" => ShellCommand::Reset,
            "clear" => ShellCommand::Clear,
            "order" | "checkout" => ShellCommand::Order,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" | "q" => ShellCommand::Quit,
            "" => bail!("Empty command"),
            other => bail!("Unknown command '{}'; type 'help'", other),
        };
        Ok(command)
    }
}

fn number(arg: Option<&str>, name: &str) -> Result<u64> {
    let arg = arg.ok_or_else(|| anyhow!("Missing {}", name))?;
    arg.parse()
        .with_context(|| format!("Invalid {}: {}", name, arg))
}

fn product_id(arg: Option<&str>) -> Result<ProductId> {
    let arg = arg.ok_or_else(|| anyhow!("Missing product id"))?;
    arg.parse()
        .with_context(|| format!("Invalid product id: {}", arg))
}

/// Run the shell command.
pub fn run(ctx: &Context) -> Result<()> {
    let mut storefront = ctx.storefront()?;
    ctx.output.info("Type 'help' for commands, 'quit' to leave.");
    ctx.output.products(&storefront.filtered());

    loop {
        let badge = storefront.cart().item_count();
        let line: String = Input::new()
            .with_prompt(format!("storefront [{}]", badge))
            .allow_empty(true)
            .interact_text()?;

        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<ShellCommand>() {
            Ok(ShellCommand::Quit) => break,
            Ok(command) => {
                if let Err(e) = apply(command, &mut storefront, ctx) {
                    ctx.output.error(&format!("{:#}", e));
                }
            }
            Err(e) => ctx.output.error(&format!("{:#}", e)),
        }
    }

    Ok(())
}

fn apply(command: ShellCommand, storefront: &mut Storefront, ctx: &Context) -> Result<()> {
    let refilter = match command {
        ShellCommand::Search(text) => storefront.set_search_text(text),
        ShellCommand::Category(category) => storefront.set_category(category),
        ShellCommand::Color(color) => storefront.set_color(color),
        ShellCommand::Price(min, max) => storefront.set_price_range(min, max),
        ShellCommand::Reset => storefront.set_criteria(ctx.config.initial_criteria()),
        ShellCommand::List => true,
        ShellCommand::Add(id) => {
            let outcome = storefront.add_to_cart(id);
            report_add(&ctx.output, id, outcome);
            if outcome.is_applied() {
                ctx.output.success(&format!(
                    "Cart: {} items, {}",
                    storefront.cart().item_count(),
                    storefront.summary().grand_total
                ));
            }
            false
        }
        ShellCommand::Remove(id) => {
            if !storefront.remove_from_cart(id) {
                ctx.output.warn(&format!("Product {} is not in the cart", id));
            }
            false
        }
        ShellCommand::Quantity(id, quantity) => {
            storefront.set_quantity(id, quantity)?;
            ctx.output.summary(&storefront.summary());
            false
        }
        ShellCommand::Cart => {
            ctx.output.summary(&storefront.summary());
            false
        }
        ShellCommand::Clear => {
            storefront.clear_cart();
            false
        }
        ShellCommand::Order => {
            let mut handoff = LoggingHandoff::new();
            let summary = storefront.place_order(&mut handoff)?;
            ctx.output
                .success(&format!("Order placed: {}", summary.grand_total));
            false
        }
        ShellCommand::Help => {
            for (usage, about) in HELP {
                ctx.output.kv(usage, about);
            }
            false
        }
        ShellCommand::Quit => false,
    };

    if refilter {
        ctx.output.products(&storefront.filtered());
    }
    Ok(())
}
