pub mod kajabi_order;
