use serde::{Deserialize, Serialize};

/// Values accepted by the `status` filter
pub const ORDER_STATUSES: &[&str] = &["Pending", "Completed", "Cancelled"];
/// Values accepted by the `paymentStatus` filter
pub const PAYMENT_STATUSES: &[&str] = &["Pending", "Paid", "Failed"];
/// Values accepted by the `deliveryStatus` filter
pub const DELIVERY_STATUSES: &[&str] = &["Processing", "Delivered", "Cancelled"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCustomer {
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBook {
    pub title: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub quantity: u32,
    pub unit_price: f64,
    pub book: OrderBook,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: OrderCustomer,
    #[serde(default)]
    pub delivery_charge: f64,
    pub final_amount: f64,
    #[serde(default)]
    pub shipping_address: String,
    #[serde(default)]
    pub payment_method: String,
    pub status: String,
    pub payment_status: String,
    pub delivery_status: String,
    #[serde(default)]
    pub books: Vec<OrderLine>,
}

impl Order {
    pub fn total_quantity(&self) -> u32 {
        self.books.iter().map(|line| line.quantity).sum()
    }

    /// Sum of line prices without delivery
    pub fn subtotal(&self) -> f64 {
        self.books
            .iter()
            .map(|line| line.unit_price * f64::from(line.quantity))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_totals() {
        let json = r#"{
            "_id": "o1",
            "user": { "name": "Rahim", "phone": "017", "email": "r@example.com", "image": "" },
            "deliveryCharge": 60,
            "finalAmount": 560,
            "shippingAddress": "Dhaka",
            "paymentMethod": "COD",
            "status": "Pending",
            "paymentStatus": "Pending",
            "deliveryStatus": "Processing",
            "books": [
                { "quantity": 2, "unitPrice": 150, "book": { "title": "A", "coverImage": "", "slug": "a" } },
                { "quantity": 1, "unitPrice": 200, "book": { "title": "B", "coverImage": "", "slug": "b" } }
            ]
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.total_quantity(), 3);
        assert_eq!(order.subtotal(), 500.0);
        assert!(ORDER_STATUSES.contains(&order.status.as_str()));
    }
}
