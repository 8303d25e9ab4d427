use crate::models::Property;

/// Rendering seam for the property table. The production impl writes a
/// text table to stdout; tests record the rows they were handed.
pub trait TableView: Send {
    /// Replace the whole table with one row per property, in the order given.
    fn replace_rows(&mut self, rows: &[Property]);
}

/// Interactive yes/no gate used before destructive operations.
pub trait ConfirmPrompt: Send {
    fn confirm(&mut self, message: &str) -> bool;
}

/// Render the property table as fixed-width text, header included.
/// Field text goes into its own cell as-is; there is no markup to escape.
pub fn render_table(rows: &[Property]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>6}  {:<30}  {:>12}  {:>8}  {}\n",
        "id", "address", "price", "size", "description"
    ));
    out.push_str(&format!(
        "{:>6}  {:<30}  {:>12}  {:>8}  {}\n",
        "------", "------------------------------", "------------", "--------", "-----------"
    ));

    for property in rows {
        out.push_str(&format!(
            "{:>6}  {:<30}  {:>12}  {:>6} m²  {}\n",
            property.id, property.address, property.price, property.size, property.description
        ));
    }

    if rows.is_empty() {
        out.push_str("(no properties)\n");
    }

    out
}
