use std::collections::HashMap;

use crate::orders::Order;

use super::types::{ClientSummary, UrgencyBucket, UrgencySummary};

/// Orders per client, busiest client first.
///
/// Clients are grouped by exact name. Ties keep the order in which clients
/// first appear in `orders`.
pub fn client_summary(orders: &[Order]) -> Vec<ClientSummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut summary: Vec<ClientSummary> = Vec::new();

    for order in orders {
        match index.get(order.client.as_str()) {
            Some(&i) => summary[i].orders += 1,
            None => {
                index.insert(order.client.as_str(), summary.len());
                summary.push(ClientSummary {
                    name: order.client.clone(),
                    orders: 1,
                });
            }
        }
    }

    // stable: equal counts stay in first-appearance order
    summary.sort_by(|a, b| b.orders.cmp(&a.orders));
    summary
}

/// Orders per urgency bucket. Always four entries, levels 1 through 4.
pub fn urgency_summary(orders: &[Order]) -> Vec<UrgencySummary> {
    let mut counts = [0usize; 4];
    for order in orders {
        let bucket = UrgencyBucket::for_minutes(order.minutes_to_complete);
        counts[usize::from(bucket.level() - 1)] += 1;
    }

    UrgencyBucket::ALL
        .iter()
        .zip(counts)
        .map(|(bucket, orders)| UrgencySummary {
            name: bucket.label().to_string(),
            orders,
            level: bucket.level(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures::order;

    #[test]
    fn test_client_summary_counts_and_order() {
        let orders = vec![
            order("1", "Beta", 10.0),
            order("2", "Acme", 20.0),
            order("3", "Acme", 30.0),
            order("4", "Gamma", 40.0),
            order("5", "Beta", 50.0),
            order("6", "Acme", 60.0),
        ];

        let summary = client_summary(&orders);

        assert_eq!(
            summary,
            vec![
                ClientSummary { name: "Acme".into(), orders: 3 },
                ClientSummary { name: "Beta".into(), orders: 2 },
                ClientSummary { name: "Gamma".into(), orders: 1 },
            ]
        );
        let total: usize = summary.iter().map(|c| c.orders).sum();
        assert_eq!(total, orders.len());
    }

    #[test]
    fn test_client_summary_ties_keep_first_appearance() {
        let orders = vec![
            order("1", "Zeta", 10.0),
            order("2", "Alpha", 20.0),
            order("3", "Mu", 30.0),
        ];

        let names: Vec<String> = client_summary(&orders).into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mu"]);
    }

    #[test]
    fn test_client_names_are_case_and_space_sensitive() {
        let orders = vec![
            order("1", "Acme", 10.0),
            order("2", "acme", 20.0),
            order("3", "Acme ", 30.0),
        ];

        assert_eq!(client_summary(&orders).len(), 3);
    }

    #[test]
    fn test_urgency_summary_always_four_buckets() {
        let summary = urgency_summary(&[]);

        assert_eq!(summary.len(), 4);
        let labels: Vec<&str> = summary.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(labels, vec!["<1h", "<4h", "<1d", ">1d"]);
        let levels: Vec<u8> = summary.iter().map(|u| u.level).collect();
        assert_eq!(levels, vec![1, 2, 3, 4]);
        assert!(summary.iter().all(|u| u.orders == 0));
    }

    #[test]
    fn test_urgency_summary_counts() {
        let orders = vec![
            order("1", "Acme", 5.0),
            order("2", "Acme", 120.0),
            order("3", "Acme", 239.9),
            order("4", "Acme", 600.0),
            order("5", "Acme", 1440.0),
            order("6", "Acme", f64::INFINITY),
        ];

        let counts: Vec<usize> = urgency_summary(&orders).iter().map(|u| u.orders).collect();

        assert_eq!(counts, vec![1, 2, 1, 2]);
        assert_eq!(counts.iter().sum::<usize>(), orders.len());
    }
}
