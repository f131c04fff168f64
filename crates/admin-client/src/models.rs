//! Entity Models
//!
//! Records as the bookstore API returns them (camelCase JSON), plus the
//! mutation bodies each endpoint expects.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};

use crate::resource::Resource;

/// Present-but-`null` reads as the default, like a missing key.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Product category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Category {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(alias = "is_leaf", deserialize_with = "null_default")]
    pub is_leaf: bool,
}

impl Resource for Category {
    const PATH: &'static str = "Category";

    fn id(&self) -> i64 {
        self.id
    }

    fn blank() -> Self {
        Self::default()
    }

    fn create_body(&self) -> Value {
        json!({ "Name": self.name, "IsLeaf": self.is_leaf })
    }

    fn update_body(&self) -> Value {
        json!({ "Id": self.id, "Name": self.name, "IsLeaf": self.is_leaf })
    }
}

/// Book, both as a managed entity and as the nested snapshot inside
/// specifications, images and order lines.
///
/// `getall` has been seen answering `id`/`title` instead of `bookId`/`name`,
/// sometimes both; the camelCase keys win.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "BookWire")]
pub struct Book {
    pub book_id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct BookWire {
    book_id: Option<i64>,
    id: Option<i64>,
    name: Option<String>,
    title: Option<String>,
    description: Option<String>,
    price: Option<f64>,
}

impl From<BookWire> for Book {
    fn from(wire: BookWire) -> Self {
        Self {
            book_id: wire.book_id.or(wire.id).unwrap_or_default(),
            name: wire.name.or(wire.title).unwrap_or_default(),
            description: wire.description.unwrap_or_default(),
            price: wire.price.unwrap_or_default(),
        }
    }
}

impl Resource for Book {
    const PATH: &'static str = "Book";

    fn id(&self) -> i64 {
        self.book_id
    }

    fn blank() -> Self {
        Self::default()
    }

    fn create_body(&self) -> Value {
        json!({ "Name": self.name, "Description": self.description, "Price": self.price })
    }

    fn update_body(&self) -> Value {
        json!({
            "BookId": self.book_id,
            "Name": self.name,
            "Description": self.description,
            "Price": self.price,
        })
    }
}

/// Technical attribute of a book (code, name, value)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Specification {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub book_id: i64,
    #[serde(deserialize_with = "null_default")]
    pub spec_code: String,
    #[serde(deserialize_with = "null_default")]
    pub spec_name: String,
    #[serde(deserialize_with = "null_default")]
    pub spec_value: String,
    #[serde(deserialize_with = "null_default")]
    pub book: Book,
}

impl Resource for Specification {
    const PATH: &'static str = "BookSpecification";

    fn id(&self) -> i64 {
        self.id
    }

    fn blank() -> Self {
        Self::default()
    }

    fn create_body(&self) -> Value {
        json!({
            "BookId": self.book_id,
            "SpecCode": self.spec_code,
            "SpecName": self.spec_name,
            "SpecValue": self.spec_value,
        })
    }

    fn update_body(&self) -> Value {
        json!({
            "Id": self.id,
            "BookId": self.book_id,
            "SpecCode": self.spec_code,
            "SpecName": self.spec_name,
            "SpecValue": self.spec_value,
        })
    }
}

/// Image set of a book: one source URL plus its rendered sizes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookImage {
    #[serde(deserialize_with = "null_default")]
    pub image_id: i64,
    #[serde(deserialize_with = "null_default")]
    pub book_id: i64,
    #[serde(deserialize_with = "null_default")]
    pub base_url: String,
    #[serde(deserialize_with = "null_default")]
    pub small_url: String,
    #[serde(deserialize_with = "null_default")]
    pub medium_url: String,
    #[serde(deserialize_with = "null_default")]
    pub large_url: String,
    #[serde(deserialize_with = "null_default")]
    pub thumbnail_url: String,
    #[serde(deserialize_with = "null_default")]
    pub is_gallery: bool,
    #[serde(deserialize_with = "null_default")]
    pub book: Book,
}

impl BookImage {
    fn body(&self) -> serde_json::Map<String, Value> {
        let mut body = serde_json::Map::new();
        body.insert("BookId".into(), json!(self.book_id));
        body.insert("BaseUrl".into(), json!(self.base_url));
        body.insert("SmallUrl".into(), json!(self.small_url));
        body.insert("MediumUrl".into(), json!(self.medium_url));
        body.insert("LargeUrl".into(), json!(self.large_url));
        body.insert("ThumbnailUrl".into(), json!(self.thumbnail_url));
        body.insert("IsGallery".into(), json!(self.is_gallery));
        body
    }
}

impl Resource for BookImage {
    const PATH: &'static str = "BookImage";

    fn id(&self) -> i64 {
        self.image_id
    }

    fn blank() -> Self {
        Self::default()
    }

    fn create_body(&self) -> Value {
        Value::Object(self.body())
    }

    fn update_body(&self) -> Value {
        let mut body = self.body();
        body.insert("ImageId".into(), json!(self.image_id));
        Value::Object(body)
    }
}

/// Customer snapshot embedded in an order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderUser {
    #[serde(deserialize_with = "null_default")]
    pub user_id: i64,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_default")]
    pub address: String,
}

/// Order line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderItem {
    #[serde(deserialize_with = "null_default")]
    pub order_item_id: i64,
    #[serde(deserialize_with = "null_default")]
    pub quantity: i64,
    #[serde(deserialize_with = "null_default")]
    pub price: f64,
    #[serde(deserialize_with = "null_default")]
    pub book: Book,
}

/// Customer order. Only its status and delivery fields are edited here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Order {
    #[serde(deserialize_with = "null_default")]
    pub order_id: i64,
    #[serde(deserialize_with = "null_default")]
    pub order_date: String,
    #[serde(deserialize_with = "null_default")]
    pub total_amount: f64,
    #[serde(deserialize_with = "null_default")]
    pub status: String,
    #[serde(deserialize_with = "null_default")]
    pub shipping_address: String,
    #[serde(deserialize_with = "null_default")]
    pub payment_method: String,
    #[serde(deserialize_with = "null_default")]
    pub user: OrderUser,
    #[serde(deserialize_with = "null_default")]
    pub order_items: Vec<OrderItem>,
}

impl Resource for Order {
    const PATH: &'static str = "Order";
    const CAN_CREATE: bool = false;
    const CAN_DELETE: bool = false;

    fn id(&self) -> i64 {
        self.order_id
    }

    fn blank() -> Self {
        Self::default()
    }

    fn create_body(&self) -> Value {
        self.update_body()
    }

    fn update_body(&self) -> Value {
        json!({
            "orderId": self.order_id,
            "userId": self.user.user_id,
            "orderDate": self.order_date,
            "totalAmount": self.total_amount,
            "status": self.status,
            "shippingAddress": self.shipping_address,
            "paymentMethod": self.payment_method,
        })
    }
}

/// Order lifecycle as labelled by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipping,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipping,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Chờ xử lý",
            OrderStatus::Processing => "Đang xử lý",
            OrderStatus::Shipping => "Đang vận chuyển",
            OrderStatus::Completed => "Hoàn thành",
            OrderStatus::Cancelled => "Đã hủy",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    /// Badge tone for a raw status string; unknown labels use `primary`.
    pub fn badge(label: &str) -> &'static str {
        match Self::from_label(label) {
            Some(OrderStatus::Pending) => "info",
            Some(OrderStatus::Processing) | None => "primary",
            Some(OrderStatus::Shipping) => "light",
            Some(OrderStatus::Completed) => "success",
            Some(OrderStatus::Cancelled) => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_accepts_snake_case_leaf_flag() {
        let cat: Category = serde_json::from_value(json!({ "id": 1, "name": "Điện thoại", "is_leaf": true })).unwrap();
        assert!(cat.is_leaf);
    }

    #[test]
    fn test_book_prefers_camel_case_keys() {
        let books: Vec<Book> = serde_json::from_value(json!([
            { "bookId": 1, "id": 9, "name": "A", "title": "B" },
            { "id": 2, "title": "C", "description": null, "price": null },
        ]))
        .unwrap();
        assert_eq!((books[0].book_id, books[0].name.as_str()), (1, "A"));
        assert_eq!((books[1].book_id, books[1].name.as_str()), (2, "C"));
        assert_eq!(books[1].description, "");
        assert_eq!(books[1].price, 0.0);
    }

    #[test]
    fn test_null_fields_read_as_empty() {
        let page: crate::resource::PageResult<Specification> = serde_json::from_value(json!({
            "items": [{ "id": 4, "bookId": 1, "specCode": "PG", "specName": null, "specValue": null, "book": null }],
            "totalPages": 1
        }))
        .unwrap();
        let spec = &page.items[0];
        assert_eq!(spec.spec_code, "PG");
        assert_eq!(spec.spec_value, "");
        assert_eq!(spec.book, Book::default());

        let order: Order = serde_json::from_value(json!({
            "orderId": 7, "status": null, "shippingAddress": null,
            "user": { "userId": 3, "phone": null }, "orderItems": null
        }))
        .unwrap();
        assert_eq!(order.status, "");
        assert_eq!(order.user.user_id, 3);
        assert!(order.order_items.is_empty());
    }

    #[test]
    fn test_book_lookup_aliases() {
        let book: Book = serde_json::from_value(json!({ "id": 3, "title": "Dế Mèn" })).unwrap();
        assert_eq!(book.book_id, 3);
        assert_eq!(book.name, "Dế Mèn");
        assert_eq!(book.description, "");
    }

    #[test]
    fn test_specification_bodies() {
        let spec = Specification {
            id: 9,
            book_id: 2,
            spec_code: "PG".into(),
            spec_name: "Số trang".into(),
            spec_value: "320".into(),
            book: Book::default(),
        };
        let create = spec.create_body();
        assert!(create.get("Id").is_none());
        assert_eq!(create["SpecCode"], "PG");

        let update = spec.update_body();
        assert_eq!(update["Id"], 9);
        assert_eq!(update["BookId"], 2);
    }

    #[test]
    fn test_image_update_carries_image_id() {
        let image = BookImage { image_id: 4, book_id: 1, is_gallery: true, ..Default::default() };
        assert!(image.create_body().get("ImageId").is_none());
        assert_eq!(image.update_body()["ImageId"], 4);
        assert_eq!(image.update_body()["IsGallery"], true);
    }

    #[test]
    fn test_order_parses_nested_snapshots() {
        let order: Order = serde_json::from_value(json!({
            "orderId": 12,
            "orderDate": "2025-03-01T10:00:00",
            "totalAmount": 150000.0,
            "status": "Hoàn thành",
            "shippingAddress": "Hà Nội",
            "paymentMethod": "COD",
            "user": { "userId": 5, "name": "An", "phone": "090", "address": "HN" },
            "orderItems": [{ "orderItemId": 1, "quantity": 2, "price": 75000.0, "book": { "bookId": 3, "name": "X", "price": 75000.0 } }]
        }))
        .unwrap();
        assert_eq!(order.user.user_id, 5);
        assert_eq!(order.order_items[0].book.book_id, 3);
        assert_eq!(order.update_body()["userId"], 5);
    }

    #[test]
    fn test_status_badges() {
        assert_eq!(OrderStatus::badge("Chờ xử lý"), "info");
        assert_eq!(OrderStatus::badge("Đã hủy"), "error");
        assert_eq!(OrderStatus::badge("???"), "primary");
        assert_eq!(OrderStatus::from_label("Hoàn thành"), Some(OrderStatus::Completed));
    }
}
