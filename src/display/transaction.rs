//! Transaction display formatting

use tabled::{settings::Style, Table, Tabled};

use crate::models::{Money, Transaction, TransactionType};
use crate::services::TransactionTotals;

use super::format::{format_optional_date, truncate};

/// Amount with the sign implied by the transaction type: `+$10.00` / `-$10.00`
pub fn format_signed_amount(amount: Money, kind: TransactionType, symbol: &str) -> String {
    let sign = match kind {
        TransactionType::Income => '+',
        TransactionType::Expense => '-',
    };
    format!("{}{}", sign, amount.format_with_symbol(symbol))
}

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl TransactionRow {
    fn new(txn: &Transaction, symbol: &str) -> Self {
        Self {
            id: txn.id.to_string(),
            date: format_optional_date(txn.date),
            description: truncate(&txn.description, 32),
            category: txn.category.clone(),
            amount: format_signed_amount(txn.amount, txn.kind, symbol),
        }
    }
}

/// Format a list of transactions as a table
pub fn format_transaction_list(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = transactions.iter().map(|t| TransactionRow::new(t, symbol));
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Income, expense and net lines shown under a transaction list
pub fn format_totals(totals: &TransactionTotals, symbol: &str) -> String {
    let net = totals.net();
    let net_sign = if net.is_negative() { "-" } else { "" };
    format!(
        "Income:   {}\nExpenses: {}\nNet:      {}{}\n",
        totals.income.format_with_symbol(symbol),
        totals.expense.format_with_symbol(symbol),
        net_sign,
        net.format_with_symbol(symbol)
    )
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", format_optional_date(txn.date)));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!(
        "Amount:      {}\n",
        format_signed_amount(txn.amount, txn.kind, symbol)
    ));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!("Description: {}\n", txn.description));

    output
}
