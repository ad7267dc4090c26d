pub static API_URL: &str = "https://api.kajabi.com";
pub static ORDERS_PATH: &str = "/api/v1/orders";

pub static CURRENCY: &str = "USD";
