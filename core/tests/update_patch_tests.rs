// tests/update_patch_tests.rs
mod common;
use common::*;

use catalog::{messages, GetProductByIdQuery, PatchProductCommand, RequestHandler, UpdateProductCommand};
use rust_decimal::Decimal;

fn full_update(id: i32, code: &str) -> UpdateProductCommand {
  UpdateProductCommand {
    id,
    code: code.to_string(),
    name: "Replaced".to_string(),
    description: "Replaced description".to_string(),
    price: Decimal::new(1500, 2),
    category_id: 9,
    stock_quantity: 0,
    active: false,
  }
}

#[tokio::test]
async fn test_update_replaces_mutable_fields_and_keeps_identity() {
  let (catalog, _repository) = catalog();
  let original = seed(&catalog, "A1", 1).await;

  let updated = catalog
    .update
    .handle(full_update(original.id, "A1-NEW"))
    .await
    .unwrap()
    .expect("product exists");

  assert_eq!(updated.id, original.id);
  assert_eq!(updated.created_at, original.created_at);
  assert_eq!(updated.code, "A1-NEW");
  assert_eq!(updated.name, "Replaced");
  assert_eq!(updated.price, Decimal::new(1500, 2));
  assert_eq!(updated.category_id, 9);
  assert_eq!(updated.stock_quantity, 0);
  assert!(!updated.active);

  let stored = catalog
    .get_by_id
    .handle(GetProductByIdQuery { id: original.id })
    .await
    .unwrap();
  assert_eq!(stored, Some(updated));
}

#[tokio::test]
async fn test_update_missing_product_returns_none_and_leaves_storage_unchanged() {
  let (catalog, repository) = catalog();
  let existing = seed(&catalog, "A1", 1).await;

  let result = catalog.update.handle(full_update(77, "ZZ")).await.unwrap();

  assert!(result.is_none());
  assert_eq!(repository.len(), 1);
  let still = catalog
    .get_by_id
    .handle(GetProductByIdQuery { id: existing.id })
    .await
    .unwrap();
  assert_eq!(still, Some(existing));
}

#[tokio::test]
async fn test_update_rejects_non_positive_price() {
  let (catalog, _repository) = catalog();
  let original = seed(&catalog, "A1", 1).await;

  let mut command = full_update(original.id, "A1");
  command.price = Decimal::ZERO;
  let err = catalog.update.handle(command).await.unwrap_err();

  assert_eq!(err.to_string(), messages::PRICE_NOT_POSITIVE);
}

#[tokio::test]
async fn test_update_rejects_code_owned_by_another_product() {
  let (catalog, _repository) = catalog();
  let first = seed(&catalog, "A1", 1).await;
  seed(&catalog, "B1", 1).await;

  let err = catalog.update.handle(full_update(first.id, "B1")).await.unwrap_err();

  assert!(err.is_validation());
  assert_eq!(err.to_string(), messages::DUPLICATE_CODE);
}

#[tokio::test]
async fn test_update_may_keep_its_own_code() {
  let (catalog, _repository) = catalog();
  let original = seed(&catalog, "A1", 1).await;

  let updated = catalog.update.handle(full_update(original.id, "A1")).await.unwrap();

  assert_eq!(updated.map(|p| p.code), Some("A1".to_string()));
}

#[tokio::test]
async fn test_patch_changes_only_provided_fields() {
  let (catalog, _repository) = catalog();
  let original = seed(&catalog, "A1", 1).await;

  let patched = catalog
    .patch
    .handle(PatchProductCommand {
      id: original.id,
      stock_quantity: Some(42),
      active: Some(false),
      ..Default::default()
    })
    .await
    .unwrap()
    .expect("product exists");

  assert_eq!(patched.stock_quantity, 42);
  assert!(!patched.active);
  assert_eq!(patched.code, original.code);
  assert_eq!(patched.name, original.name);
  assert_eq!(patched.description, original.description);
  assert_eq!(patched.price, original.price);
  assert_eq!(patched.category_id, original.category_id);
  assert_eq!(patched.created_at, original.created_at);
}

#[tokio::test]
async fn test_patch_missing_product_returns_none() {
  let (catalog, repository) = catalog();

  let result = catalog
    .patch
    .handle(PatchProductCommand {
      id: 5,
      name: Some("Nobody".to_string()),
      ..Default::default()
    })
    .await
    .unwrap();

  assert!(result.is_none());
  assert!(repository.is_empty());
}

#[tokio::test]
async fn test_patch_validates_provided_price_and_code() {
  let (catalog, _repository) = catalog();
  let original = seed(&catalog, "A1", 1).await;
  seed(&catalog, "B1", 1).await;

  let bad_price = catalog
    .patch
    .handle(PatchProductCommand {
      id: original.id,
      price: Some(Decimal::new(-1, 0)),
      ..Default::default()
    })
    .await
    .unwrap_err();
  assert_eq!(bad_price.to_string(), messages::PRICE_NOT_POSITIVE);

  let taken_code = catalog
    .patch
    .handle(PatchProductCommand {
      id: original.id,
      code: Some("B1".to_string()),
      ..Default::default()
    })
    .await
    .unwrap_err();
  assert_eq!(taken_code.to_string(), messages::DUPLICATE_CODE);

  let unchanged = catalog
    .get_by_id
    .handle(GetProductByIdQuery { id: original.id })
    .await
    .unwrap();
  assert_eq!(unchanged, Some(original));
}

#[tokio::test]
async fn test_patch_command_fields_are_all_optional_except_id() {
  let command: PatchProductCommand = serde_json::from_str(r#"{"id": 3, "price": 12.5}"#).unwrap();

  assert_eq!(command.id, 3);
  assert_eq!(command.price, Some(Decimal::new(125, 1)));
  assert!(command.code.is_none());
  assert!(command.active.is_none());
  assert!(serde_json::from_str::<PatchProductCommand>(r#"{"price": 12.5}"#).is_err());
}

#[tokio::test]
async fn test_update_and_patch_reject_sub_cent_prices() {
  let (catalog, _repository) = catalog();
  let original = seed(&catalog, "A1", 1).await;

  let mut command = full_update(original.id, "A1");
  command.price = Decimal::new(1, 3);
  let err = catalog.update.handle(command).await.unwrap_err();
  assert_eq!(err.to_string(), messages::PRICE_TOO_PRECISE);

  let err = catalog
    .patch
    .handle(PatchProductCommand {
      id: original.id,
      price: Some(Decimal::new(10005, 3)),
      ..Default::default()
    })
    .await
    .unwrap_err();
  assert_eq!(err.to_string(), messages::PRICE_TOO_PRECISE);
}
