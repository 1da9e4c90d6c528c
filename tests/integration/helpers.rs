//! Shared test helpers: an in-process stub of the Flyercast backend.
//!
//! The stub speaks the backend's wire shapes (PascalCase field names,
//! bearer auth, multipart flyer upload) against canned fixtures, bound to
//! an ephemeral port so reqwest-based code is exercised end to end.

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use bytes::Bytes;
use serde_json::{Value, json};
use uuid::Uuid;

use flyercast_client::ApiClient;
use flyercast_core::config::api::ApiConfig;

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "admin-pass";
pub const SHOP_EMAIL: &str = "shop@example.com";
pub const SHOP_PASSWORD: &str = "shop-pass";

/// Fixture state shared by the stub handlers.
#[derive(Clone)]
struct StubState {
    companies: Arc<Mutex<Vec<Value>>>,
    flyers: Arc<Mutex<Vec<Value>>>,
    customers: Arc<Mutex<Vec<Value>>>,
    jpeg: Bytes,
    png: Bytes,
}

/// A running stub backend.
pub struct TestBackend {
    /// Base URL of the stub (`http://127.0.0.1:<port>`).
    pub base_url: String,
    /// The seeded company.
    pub company_id: Uuid,
    /// The seeded flyer (a 4x4 JPEG titled "Summer Sale!!").
    pub flyer_id: Uuid,
    /// A seeded flyer whose download endpoint answers with an empty body.
    pub empty_flyer_id: Uuid,
    handle: tokio::task::JoinHandle<()>,
}

impl Drop for TestBackend {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Seeded ids are stable within one spawn.
pub async fn spawn_backend() -> TestBackend {
    let company_id = Uuid::new_v4();
    let flyer_id = Uuid::new_v4();
    let empty_flyer_id = Uuid::new_v4();

    let jpeg = encode_fixture_image(image::ImageFormat::Jpeg);
    let png = encode_fixture_image(image::ImageFormat::Png);

    let state = StubState {
        companies: Arc::new(Mutex::new(vec![json!({
            "Id": company_id,
            "Name": "Bakery Blum",
            "ContactEmail": SHOP_EMAIL,
            "ReviewLinkUrl": null,
        })])),
        flyers: Arc::new(Mutex::new(vec![
            json!({
                "Id": flyer_id,
                "Title": "Summer Sale!!",
                "CompanyId": company_id,
                "ForDate": "2025-06-01",
                "ImageUrl": null,
                "CreatedAt": "2025-05-28T09:30:00Z",
            }),
            json!({
                "Id": empty_flyer_id,
                "Title": "Empty Promo",
                "CompanyId": company_id,
                "ForDate": "2025-06-15",
                "ImageUrl": null,
                "CreatedAt": "2025-05-28T09:31:00Z",
            }),
        ])),
        customers: Arc::new(Mutex::new(Vec::new())),
        jpeg,
        png,
    };

    let app = router(state, company_id, empty_flyer_id);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub backend");
    let addr = listener.local_addr().expect("stub local addr");
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub backend serve");
    });

    TestBackend {
        base_url: format!("http://{addr}"),
        company_id,
        flyer_id,
        empty_flyer_id,
        handle,
    }
}

impl TestBackend {
    /// An unauthenticated client against this stub.
    pub fn client(&self) -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url: self.base_url.clone(),
        })
        .expect("client for stub")
    }

    /// A client signed in as the admin fixture.
    pub async fn admin_client(&self) -> ApiClient {
        let client = self.client();
        let session = client
            .login(ADMIN_EMAIL, ADMIN_PASSWORD)
            .await
            .expect("admin login");
        client.with_token(session.token)
    }

    /// A client signed in as the company fixture.
    pub async fn company_client(&self) -> ApiClient {
        let client = self.client();
        let session = client
            .login(SHOP_EMAIL, SHOP_PASSWORD)
            .await
            .expect("company login");
        client.with_token(session.token)
    }
}

fn router(state: StubState, company_id: Uuid, empty_flyer_id: Uuid) -> Router {
    let login_company = company_id;
    Router::new()
        .route(
            "/auth/login",
            post(move |Json(body): Json<Value>| async move {
                login(body, login_company)
            }),
        )
        .route("/auth/register", post(register))
        .route("/company", get(list_companies).post(create_company))
        .route(
            "/company/{id}",
            get(get_company).put(update_company).delete(delete_company),
        )
        .route("/flyer", get(list_flyers))
        .route("/flyer/company/{id}", get(list_company_flyers))
        .route("/flyer/upload", post(upload_flyer))
        .route("/flyer/{id}", put(update_flyer).delete(delete_flyer))
        .route(
            "/flyer/download/{id}",
            get(
                move |state: State<StubState>, headers: HeaderMap, path: Path<Uuid>| {
                    download_flyer(state, headers, path, empty_flyer_id)
                },
            ),
        )
        .route("/review/customer", post(add_customer))
        .route("/review/customers/{company_id}", get(list_customers))
        .route(
            "/review/customer/{id}",
            get(get_customer).delete(deactivate_customer),
        )
        .route("/cdn/img.jpg", get(cdn_jpeg))
        .route("/cdn/img.png", get(cdn_png))
        .route("/cdn/empty.jpg", get(cdn_empty))
        .route("/protected/img.png", get(protected_png))
        .with_state(state)
}

/// A 4x4 solid-color fixture image.
fn encode_fixture_image(format: image::ImageFormat) -> Bytes {
    let img = image::RgbImage::from_pixel(4, 4, image::Rgb([200, 40, 40]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, format).expect("encode fixture");
    Bytes::from(out.into_inner())
}

fn bearer(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(String::from)
}

fn login(body: Value, company_id: Uuid) -> Response {
    let email = body["Email"].as_str().unwrap_or_default();
    let password = body["Password"].as_str().unwrap_or_default();
    match (email, password) {
        (ADMIN_EMAIL, ADMIN_PASSWORD) => Json(json!({
            "Token": "admin-token",
            "Role": "Admin",
            "CompanyId": null,
            "Email": ADMIN_EMAIL,
        }))
        .into_response(),
        (SHOP_EMAIL, SHOP_PASSWORD) => Json(json!({
            "Token": "shop-token",
            "Role": "Company",
            "CompanyId": company_id,
            "Email": SHOP_EMAIL,
        }))
        .into_response(),
        _ => (StatusCode::UNAUTHORIZED, "invalid credentials").into_response(),
    }
}

async fn register(State(state): State<StubState>, Json(body): Json<Value>) -> Response {
    let company_id = Uuid::new_v4();
    let email = body["Email"].as_str().unwrap_or_default().to_string();
    state.companies.lock().unwrap().push(json!({
        "Id": company_id,
        "Name": body["CompanyName"],
        "ContactEmail": email,
        "ReviewLinkUrl": null,
    }));
    Json(json!({
        "Token": format!("token-{company_id}"),
        "Role": "Company",
        "CompanyId": company_id,
        "Email": email,
    }))
    .into_response()
}

async fn list_companies(State(state): State<StubState>, headers: HeaderMap) -> Response {
    if bearer(&headers).is_none() {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(Value::Array(state.companies.lock().unwrap().clone())).into_response()
}

async fn create_company(State(state): State<StubState>, Json(body): Json<Value>) -> Response {
    let company = json!({
        "Id": Uuid::new_v4(),
        "Name": body["Name"],
        "ContactEmail": body["ContactEmail"],
        "ReviewLinkUrl": body.get("ReviewLinkUrl").cloned().unwrap_or(Value::Null),
    });
    state.companies.lock().unwrap().push(company.clone());
    Json(company).into_response()
}

async fn get_company(State(state): State<StubState>, Path(id): Path<Uuid>) -> Response {
    let companies = state.companies.lock().unwrap();
    match companies.iter().find(|c| c["Id"] == json!(id)) {
        Some(company) => Json(company.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn update_company(
    State(state): State<StubState>,
    Path(id): Path<Uuid>,
    Json(body): Json<Value>,
) -> Response {
    let mut companies = state.companies.lock().unwrap();
    match companies.iter_mut().find(|c| c["Id"] == json!(id)) {
        Some(company) => {
            for field in ["Name", "ContactEmail", "ReviewLinkUrl"] {
                if let Some(value) = body.get(field) {
                    if !value.is_null() {
                        company[field] = value.clone();
                    }
                }
            }
            Json(company.clone()).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn delete_company(State(state): State<StubState>, Path(id): Path<Uuid>) -> Response {
    state
        .companies
        .lock()
        .unwrap()
        .retain(|c| c["Id"] != json!(id));
    StatusCode::NO_CONTENT.into_response()
}

fn month_matches(flyer: &Value, params: &HashMap<String, String>) -> bool {
    let Some(for_date) = flyer["ForDate"].as_str() else {
        return false;
    };
    let mut parts = for_date.split('-');
    let (Some(year), Some(month)) = (parts.next(), parts.next()) else {
        return false;
    };
    params.get("year").is_none_or(|y| y == year)
        && params
            .get("month")
            .is_none_or(|m| m.parse::<u32>().ok() == month.parse::<u32>().ok())
}

async fn list_flyers(
    State(state): State<StubState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let flyers: Vec<Value> = state
        .flyers
        .lock()
        .unwrap()
        .iter()
        .filter(|f| month_matches(f, &params))
        .cloned()
        .collect();
    Json(Value::Array(flyers)).into_response()
}

async fn list_company_flyers(
    State(state): State<StubState>,
    Path(company_id): Path<Uuid>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let flyers: Vec<Value> = state
        .flyers
        .lock()
        .unwrap()
        .iter()
        .filter(|f| f["CompanyId"] == json!(company_id) && month_matches(f, &params))
        .cloned()
        .collect();
    Json(Value::Array(flyers)).into_response()
}

async fn upload_flyer(State(state): State<StubState>, mut multipart: Multipart) -> Response {
    let mut fields: HashMap<String, String> = HashMap::new();
    let mut file_len = 0usize;
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        if name == "file" {
            file_len = field.bytes().await.map(|b| b.len()).unwrap_or(0);
        } else {
            fields.insert(name, field.text().await.unwrap_or_default());
        }
    }
    if file_len == 0 {
        return (StatusCode::BAD_REQUEST, "missing file").into_response();
    }
    let flyer = json!({
        "Id": Uuid::new_v4(),
        "Title": fields.get("title").cloned().unwrap_or_default(),
        "CompanyId": fields.get("companyId").cloned().unwrap_or_default(),
        "ForDate": fields.get("forDate").cloned().unwrap_or_default(),
        "ImageUrl": null,
        "CreatedAt": "2025-05-28T09:30:00Z",
    });
    state.flyers.lock().unwrap().push(flyer.clone());
    Json(flyer).into_response()
}

async fn update_flyer(
    State(state): State<StubState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Response {
    let mut fields: HashMap<String, String> = HashMap::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        if name != "file" {
            fields.insert(name, field.text().await.unwrap_or_default());
        }
    }
    let mut flyers = state.flyers.lock().unwrap();
    match flyers.iter_mut().find(|f| f["Id"] == json!(id)) {
        Some(flyer) => {
            if let Some(title) = fields.get("title") {
                flyer["Title"] = json!(title);
            }
            if let Some(for_date) = fields.get("forDate") {
                flyer["ForDate"] = json!(for_date);
            }
            Json(flyer.clone()).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn delete_flyer(State(state): State<StubState>, Path(id): Path<Uuid>) -> Response {
    state.flyers.lock().unwrap().retain(|f| f["Id"] != json!(id));
    StatusCode::NO_CONTENT.into_response()
}

async fn download_flyer(
    State(state): State<StubState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    empty_flyer_id: Uuid,
) -> Response {
    if bearer(&headers).is_none() {
        return StatusCode::FORBIDDEN.into_response();
    }
    if id == empty_flyer_id {
        return Response::new(Body::empty());
    }
    let known = state
        .flyers
        .lock()
        .unwrap()
        .iter()
        .any(|f| f["Id"] == json!(id));
    if !known {
        return StatusCode::NOT_FOUND.into_response();
    }
    (
        [(header::CONTENT_TYPE, "image/jpeg")],
        state.jpeg.clone(),
    )
        .into_response()
}

async fn add_customer(State(state): State<StubState>, Json(body): Json<Value>) -> Response {
    let customer = json!({
        "Id": Uuid::new_v4(),
        "CustomerName": body["CustomerName"],
        "PhoneNumber": body["PhoneNumber"],
        "CompanyId": body["CompanyId"],
        "IsActive": true,
        "Day0Sent": false,
        "Day1Sent": false,
        "Day3Sent": false,
        "CreatedAt": "2025-05-28T09:30:00Z",
    });
    state.customers.lock().unwrap().push(customer.clone());
    Json(customer).into_response()
}

async fn list_customers(State(state): State<StubState>, Path(company_id): Path<Uuid>) -> Response {
    let customers: Vec<Value> = state
        .customers
        .lock()
        .unwrap()
        .iter()
        .filter(|c| c["CompanyId"] == json!(company_id))
        .cloned()
        .collect();
    Json(Value::Array(customers)).into_response()
}

async fn get_customer(State(state): State<StubState>, Path(id): Path<Uuid>) -> Response {
    let customers = state.customers.lock().unwrap();
    match customers.iter().find(|c| c["Id"] == json!(id)) {
        Some(customer) => Json(customer.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn deactivate_customer(State(state): State<StubState>, Path(id): Path<Uuid>) -> Response {
    let mut customers = state.customers.lock().unwrap();
    match customers.iter_mut().find(|c| c["Id"] == json!(id)) {
        Some(customer) => {
            customer["IsActive"] = json!(false);
            StatusCode::NO_CONTENT.into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn cdn_jpeg(State(state): State<StubState>) -> Response {
    ([(header::CONTENT_TYPE, "image/jpeg")], state.jpeg.clone()).into_response()
}

async fn cdn_png(State(state): State<StubState>) -> Response {
    ([(header::CONTENT_TYPE, "image/png")], state.png.clone()).into_response()
}

async fn cdn_empty() -> Response {
    Response::new(Body::empty())
}

async fn protected_png(State(state): State<StubState>, headers: HeaderMap) -> Response {
    if bearer(&headers).is_none() {
        return StatusCode::FORBIDDEN.into_response();
    }
    ([(header::CONTENT_TYPE, "image/png")], state.png.clone()).into_response()
}
