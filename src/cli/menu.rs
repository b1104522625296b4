//! Interactive menu
//!
//! Reads menu choices and raw answers line by line, hands them to the
//! ledger engine and prints the outcome. The menu holds no business rules:
//! every answer goes to the engine as typed, except that a blank initial
//! deposit is passed on as "not supplied".
//!
//! Recoverable ledger errors are printed as `Error: <message>` and the menu
//! carries on. Storage errors end the session and are returned to the
//! caller, which should exit with a failure status.

use crate::core::engine::LedgerEngine;
use crate::core::traits::{Clock, LedgerStore};
use crate::core::validation::optional_input;
use crate::io::display::{
    format_currency, write_account_details, write_account_listing, write_transaction_history,
};
use crate::types::LedgerError;
use std::io::{self, BufRead, Write};

const MENU: &str = "\
========== Ledger Manager ==========
1. Create New Account
2. View Account Details
3. List All Accounts
4. Deposit Funds
5. Withdraw Funds
6. Transfer Between Accounts
7. Transaction History
8. Delete Account
9. Exit
====================================";

/// Whether the session goes on after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Interactive menu loop over any line-based input and output
pub struct Menu<'a, S: LedgerStore, C: Clock, R: BufRead, W: Write> {
    engine: &'a mut LedgerEngine<S, C>,
    input: R,
    output: W,
}

fn output_error(error: io::Error) -> String {
    format!("Failed to write output: {}", error)
}

impl<'a, S: LedgerStore, C: Clock, R: BufRead, W: Write> Menu<'a, S, C, R, W> {
    pub fn new(engine: &'a mut LedgerEngine<S, C>, input: R, output: W) -> Self {
        Menu {
            engine,
            input,
            output,
        }
    }

    /// Run the menu until the operator exits or input ends
    ///
    /// # Returns
    ///
    /// * `Ok(())` when the operator chose Exit or input reached end of file
    /// * `Err(String)` if a fatal error occurred (ledger could not be saved,
    ///   input/output failure)
    pub fn run(&mut self) -> Result<(), String> {
        loop {
            writeln!(self.output, "\n{}", MENU).map_err(output_error)?;
            let Some(choice) = self.prompt("Select an option (1-9): ")? else {
                return Ok(());
            };

            let flow = match choice.trim() {
                "1" => self.create_account()?,
                "2" => self.view_account_details()?,
                "3" => self.list_all_accounts()?,
                "4" => self.deposit_funds()?,
                "5" => self.withdraw_funds()?,
                "6" => self.transfer_funds()?,
                "7" => self.view_transaction_history()?,
                "8" => self.delete_account()?,
                "9" => {
                    writeln!(self.output, "Goodbye!").map_err(output_error)?;
                    return Ok(());
                }
                _ => {
                    writeln!(self.output, "Invalid option. Please select 1-9.")
                        .map_err(output_error)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit || self.prompt("\nPress Enter to continue...")?.is_none() {
                return Ok(());
            }
        }
    }

    fn create_account(&mut self) -> Result<Flow, String> {
        self.header("Create New Account")?;
        let Some(name) = self.prompt("Account holder name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(deposit) = self.prompt("Initial deposit (default 0): ")? else {
            return Ok(Flow::Exit);
        };

        let result = self.engine.create_account(&name, optional_input(&deposit));
        self.report(result, |out, account| {
            writeln!(out, "Account created successfully!")?;
            write_account_details(&account, out)
        })
    }

    fn view_account_details(&mut self) -> Result<Flow, String> {
        self.header("View Account Details")?;
        let Some(id) = self.prompt("Account ID: ")? else {
            return Ok(Flow::Exit);
        };

        let result = self.engine.view_account_details(&id).cloned();
        self.report(result, |out, account| write_account_details(&account, out))
    }

    fn list_all_accounts(&mut self) -> Result<Flow, String> {
        self.header("All Accounts")?;
        write_account_listing(self.engine.list_all_accounts(), &mut self.output)
            .map_err(output_error)?;
        Ok(Flow::Continue)
    }

    fn deposit_funds(&mut self) -> Result<Flow, String> {
        self.header("Deposit Funds")?;
        let Some(id) = self.prompt("Account ID: ")? else {
            return Ok(Flow::Exit);
        };
        if let Some(error) = self.engine.view_account_details(&id).err() {
            return self.report_error(error);
        }
        let Some(amount) = self.prompt("Deposit amount: ")? else {
            return Ok(Flow::Exit);
        };

        let result = self.engine.deposit_funds(&id, &amount);
        self.report(result, |out, account| {
            writeln!(
                out,
                "Deposit successful. New balance: {}",
                format_currency(account.balance)
            )
        })
    }

    fn withdraw_funds(&mut self) -> Result<Flow, String> {
        self.header("Withdraw Funds")?;
        let Some(id) = self.prompt("Account ID: ")? else {
            return Ok(Flow::Exit);
        };
        if let Some(error) = self.engine.view_account_details(&id).err() {
            return self.report_error(error);
        }
        let Some(amount) = self.prompt("Withdrawal amount: ")? else {
            return Ok(Flow::Exit);
        };

        let result = self.engine.withdraw_funds(&id, &amount);
        self.report(result, |out, account| {
            writeln!(
                out,
                "Withdrawal successful. New balance: {}",
                format_currency(account.balance)
            )
        })
    }

    fn transfer_funds(&mut self) -> Result<Flow, String> {
        self.header("Transfer Between Accounts")?;
        let Some(from) = self.prompt("From account ID: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(to) = self.prompt("To account ID: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(amount) = self.prompt("Transfer amount: ")? else {
            return Ok(Flow::Exit);
        };

        let result = self.engine.transfer_funds(&from, &to, &amount);
        self.report(result, |out, receipt| {
            writeln!(
                out,
                "Transfer successful. Moved {} from {} to {}.",
                format_currency(receipt.amount),
                receipt.source.id,
                receipt.destination.id
            )?;
            writeln!(
                out,
                "{} balance: {}",
                receipt.source.id,
                format_currency(receipt.source.balance)
            )?;
            writeln!(
                out,
                "{} balance: {}",
                receipt.destination.id,
                format_currency(receipt.destination.balance)
            )
        })
    }

    fn view_transaction_history(&mut self) -> Result<Flow, String> {
        self.header("Transaction History")?;
        let Some(id) = self.prompt("Account ID: ")? else {
            return Ok(Flow::Exit);
        };

        let history = match self.engine.view_transaction_history(&id) {
            Ok(history) => history,
            Err(error) => return self.report_error(error),
        };
        writeln!(self.output, "History for {}", id.trim()).map_err(output_error)?;
        write_transaction_history(history, &mut self.output).map_err(output_error)?;
        Ok(Flow::Continue)
    }

    fn delete_account(&mut self) -> Result<Flow, String> {
        self.header("Delete Account")?;
        let Some(id) = self.prompt("Account ID: ")? else {
            return Ok(Flow::Exit);
        };

        let result = self.engine.delete_account(&id);
        self.report(result, |out, account| {
            writeln!(
                out,
                "Account {} ({}) deleted.",
                account.id, account.holder_name
            )
        })
    }

    /// Print the outcome of an engine call
    ///
    /// Fatal errors are returned; everything else is written to the output.
    fn report<T>(
        &mut self,
        result: Result<T, LedgerError>,
        on_success: impl FnOnce(&mut dyn Write, T) -> io::Result<()>,
    ) -> Result<Flow, String> {
        match result {
            Ok(value) => {
                on_success(&mut self.output, value).map_err(output_error)?;
                Ok(Flow::Continue)
            }
            Err(error) => self.report_error(error),
        }
    }

    fn report_error(&mut self, error: LedgerError) -> Result<Flow, String> {
        if !error.is_recoverable() {
            return Err(error.to_string());
        }
        writeln!(self.output, "Error: {}", error.operator_message()).map_err(output_error)?;
        Ok(Flow::Continue)
    }

    fn header(&mut self, title: &str) -> Result<(), String> {
        writeln!(self.output, "\n=== {} ===", title).map_err(output_error)
    }

    /// Print a prompt and read one answer
    ///
    /// Returns `None` at end of input. The trailing newline is stripped.
    fn prompt(&mut self, label: &str) -> Result<Option<String>, String> {
        write!(self.output, "{}", label).map_err(output_error)?;
        self.output.flush().map_err(output_error)?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| format!("Failed to read input: {}", e))?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
