use serde::Serialize;

use crate::orders::Order;

const RULE_WIDTH: usize = 48;
const LABEL_WIDTH: usize = 12;
const NOTES_LINES: usize = 6;

/// A shop-floor ticket for one order.
///
/// The QR payload is the order id; scanners resolve it against the loaded
/// plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderTicket {
    pub order_id: String,
    pub client: String,
    pub article: String,
    pub color: String,
    pub finishing: String,
    pub qr_payload: String,
}

impl OrderTicket {
    pub fn new(order: &Order) -> Self {
        Self {
            order_id: order.id.clone(),
            client: order.client.clone(),
            article: order.article.clone(),
            color: order.color.clone(),
            finishing: order.finishing.clone(),
            qr_payload: order.id.clone(),
        }
    }

    /// Download name: `ProductionOrder-<id>.txt`, with path-unsafe
    /// characters in the id replaced by `_`.
    pub fn file_name(&self) -> String {
        let id: String = self
            .order_id
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        format!("ProductionOrder-{}.txt", id)
    }

    /// Renders the ticket as plain text.
    pub fn render_text(&self) -> String {
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);

        let mut lines = vec![
            heavy.clone(),
            format!("{:^width$}", "PRODUCTION ORDER", width = RULE_WIDTH),
            format!(
                "{:^width$}",
                format!("Order ID: {}", self.order_id),
                width = RULE_WIDTH
            ),
            heavy.clone(),
        ];
        for (label, value) in [
            ("CLIENT:", &self.client),
            ("ARTICLE:", &self.article),
            ("COLOR:", &self.color),
            ("FINISHING:", &self.finishing),
        ] {
            lines.push(field_line(label, value));
        }
        lines.push(light.clone());
        lines.push(field_line("QR:", &self.qr_payload));
        lines.push(light);
        lines.push("NOTES & INSTRUCTIONS:".to_string());
        lines.extend((0..NOTES_LINES).map(|_| "_".repeat(RULE_WIDTH)));
        lines.push(heavy);

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

fn field_line(label: &str, value: &str) -> String {
    format!("{:<width$}{}", label, value, width = LABEL_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures::order;

    #[test]
    fn test_ticket_from_order() {
        let ticket = OrderTicket::new(&order("A-17", "Acme", 30.0));
        assert_eq!(ticket.order_id, "A-17");
        assert_eq!(ticket.qr_payload, "A-17");
        assert_eq!(ticket.finishing, "Ram");
    }

    #[test]
    fn test_render_text_contains_fields() {
        let text = OrderTicket::new(&order("A-17", "Acme", 30.0)).render_text();

        assert!(text.contains("PRODUCTION ORDER"));
        assert!(text.contains("Order ID: A-17"));
        assert!(text.contains("CLIENT:     Acme"));
        assert!(text.contains("ARTICLE:    Popeline"));
        assert!(text.contains("COLOR:      Blu"));
        assert!(text.contains("FINISHING:  Ram"));
        assert!(text.contains("NOTES & INSTRUCTIONS:"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_render_text_layout() {
        let text = OrderTicket::new(&order("A-17", "Acme", 30.0)).render_text();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4 + 4 + 3 + 1 + NOTES_LINES + 1);
        assert_eq!(lines[0], "=".repeat(RULE_WIDTH));
        assert_eq!(lines[1].trim(), "PRODUCTION ORDER");
        assert_eq!(lines[1].len(), RULE_WIDTH);
        assert_eq!(lines[9], "QR:         A-17");
        assert_eq!(lines.last().copied(), Some(lines[0]));
    }

    #[test]
    fn test_file_name() {
        let ticket = OrderTicket::new(&order("A-17", "Acme", 30.0));
        assert_eq!(ticket.file_name(), "ProductionOrder-A-17.txt");
    }

    #[test]
    fn test_file_name_replaces_unsafe_characters() {
        let ticket = OrderTicket::new(&order("2024/07 #3", "Acme", 30.0));
        assert_eq!(ticket.file_name(), "ProductionOrder-2024_07__3.txt");
    }
}
