pub mod gift_product;
