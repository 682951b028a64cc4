//! The menu loop.

use std::io::{BufRead, Write};

use storefront_core::ProductId;
use storefront_inventory::InventoryManager;

use crate::error::{ShellError, ShellResult};
use crate::menu::{MENU_TEXT, MenuChoice, PROMPT, Trade};

/// What the loop does after handling one menu choice.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Interactive session over an [`InventoryManager`].
///
/// Owns the manager and both I/O handles; nothing is process-global.
pub struct Shell<R, W> {
    store_name: String,
    manager: InventoryManager,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(
        store_name: impl Into<String>,
        manager: InventoryManager,
        input: R,
        output: W,
    ) -> Self {
        Self {
            store_name: store_name.into(),
            manager,
            input,
            output,
        }
    }

    pub fn manager(&self) -> &InventoryManager {
        &self.manager
    }

    /// Hand back the manager and output once the session is over.
    pub fn into_parts(self) -> (InventoryManager, W) {
        (self.manager, self.output)
    }

    /// Run until the user exits or input ends.
    ///
    /// Only console I/O failures escape; every other error is printed and the
    /// menu is shown again.
    pub fn run(&mut self) -> ShellResult<()> {
        writeln!(self.output, "=== Welcome to the {} ===", self.store_name)?;

        loop {
            write!(self.output, "{MENU_TEXT}\n{PROMPT}")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                tracing::debug!("input closed; ending session");
                break;
            };

            let flow = match MenuChoice::parse(&line) {
                Some(MenuChoice::List) => self.list_products()?,
                Some(MenuChoice::Trade(trade)) => self.handle_trade(trade)?,
                Some(MenuChoice::Exit) => Flow::Exit,
                None => {
                    writeln!(self.output, "Invalid choice. Try again.\n")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        writeln!(self.output, "Thanks for visiting. Goodbye!")?;
        self.output.flush()?;
        Ok(())
    }

    fn list_products(&mut self) -> ShellResult<Flow> {
        for (id, shown) in self.manager.list() {
            writeln!(self.output, "{id}) {shown}")?;
        }
        writeln!(self.output)?;
        Ok(Flow::Continue)
    }

    fn handle_trade(&mut self, trade: Trade) -> ShellResult<Flow> {
        match self.try_trade(trade) {
            Ok(None) => Ok(Flow::Exit),
            Ok(Some(stock)) => {
                tracing::debug!(?trade, stock, "trade completed");
                writeln!(self.output, "{}\n", trade.success_message())?;
                Ok(Flow::Continue)
            }
            Err(err) if err.is_recoverable() => {
                writeln!(self.output, "Error: {err}\n")?;
                Ok(Flow::Continue)
            }
            Err(err) => Err(err),
        }
    }

    /// New stock on success; `Ok(None)` when input ends mid-prompt.
    fn try_trade(&mut self, trade: Trade) -> ShellResult<Option<u64>> {
        let Some(id_text) = self.prompt(trade.id_prompt())? else {
            return Ok(None);
        };
        let id: ProductId = id_text.parse()?;

        let Some(qty_text) = self.prompt("Enter quantity: ")? else {
            return Ok(None);
        };
        let quantity: i64 = qty_text
            .trim()
            .parse()
            .map_err(|e| ShellError::parse("quantity", e))?;

        let stock = match trade {
            Trade::Buy => self.manager.buy(id, quantity)?,
            Trade::Cancel => self.manager.cancel(id, quantity)?,
        };
        Ok(Some(stock))
    }

    fn prompt(&mut self, text: &str) -> ShellResult<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Next input line, decoded lossily so stray bytes become a bad choice or
    /// a parse error instead of an I/O failure.
    fn read_line(&mut self) -> ShellResult<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use storefront_catalog::{Catalog, ProductRecord};

    fn compass_shell(script: &[u8]) -> Shell<Cursor<Vec<u8>>, Vec<u8>> {
        let record = ProductRecord::new(ProductId::new(1).unwrap(), "Compass", 5).unwrap();
        let manager = InventoryManager::new(Catalog::from_records(vec![record]).unwrap());
        Shell::new("Test Store", manager, Cursor::new(script.to_vec()), Vec::new())
    }

    fn run_script(script: impl AsRef<[u8]>) -> (InventoryManager, String) {
        let mut shell = compass_shell(script.as_ref());
        shell.run().unwrap();
        let (manager, out) = shell.into_parts();
        (manager, String::from_utf8(out).unwrap())
    }

    fn compass_stock(manager: &InventoryManager) -> u64 {
        manager.product(ProductId::new(1).unwrap()).unwrap().quantity()
    }

    #[test]
    fn greets_and_says_goodbye() {
        let (_, out) = run_script("4\n");
        assert!(out.starts_with("=== Welcome to the Test Store ===\n"));
        assert!(out.ends_with("Thanks for visiting. Goodbye!\n"));
    }

    #[test]
    fn end_of_input_ends_session_cleanly() {
        let (_, out) = run_script("");
        assert!(out.ends_with("Thanks for visiting. Goodbye!\n"));
    }

    #[test]
    fn end_of_input_mid_trade_ends_session_without_mutation() {
        let (manager, out) = run_script("2\n1\n");
        assert_eq!(compass_stock(&manager), 5);
        assert!(out.ends_with("Thanks for visiting. Goodbye!\n"));
    }

    #[test]
    fn lists_products_by_id() {
        let (_, out) = run_script("1\n4\n");
        assert!(out.contains("1) Compass (qty: 5)\n\n"));
    }

    #[test]
    fn unknown_choice_is_reported() {
        let (_, out) = run_script("9\n4\n");
        assert!(out.contains("Invalid choice. Try again.\n"));
    }

    #[test]
    fn non_numeric_input_is_an_error_not_a_crash() {
        let (manager, out) = run_script("2\nabc\n2\n1\nlots\n4\n");
        assert_eq!(out.matches("Error: ").count(), 2);
        assert!(out.contains("Error: invalid number for quantity"));
        assert_eq!(compass_stock(&manager), 5);
    }

    #[test]
    fn non_utf8_quantity_is_a_parse_error() {
        let (manager, out) = run_script(b"2\n1\n\xff\n4\n");
        assert!(out.contains("Error: invalid number for quantity"));
        assert_eq!(compass_stock(&manager), 5);
    }

    #[test]
    fn negative_quantity_is_invalid_quantity() {
        let (_, out) = run_script("2\n1\n-1\n4\n");
        assert!(out.contains("Error: quantity must be a positive integer (got -1)"));
    }
}
