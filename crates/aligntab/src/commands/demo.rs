//! Demo command - print a small sample table

use crate::output::print_table;
use aligntab_core::Table;
use aligntab_core::table::DEFAULT_SPACING;
use anyhow::Result;

pub fn run() -> Result<()> {
    let table = demo_table()?;
    print_table(&table.render())?;
    Ok(())
}

fn demo_table() -> aligntab_core::Result<Table> {
    let mut table = Table::new(3, DEFAULT_SPACING)?;
    table.add_label(&["Name", "age", "Address"])?;
    table.write_line(&["abc", "999", "abc"])?;
    table.write_line(&["adf", "123", "ope"])?;
    Ok(table)
}
