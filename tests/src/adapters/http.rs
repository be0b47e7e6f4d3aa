//! HTTP adapters against a local axum server.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tourbook_common::booking::form::Application;
use tourbook_common::booking::tour::{Excursion, Tour};
use tourbook_common::config::{ApiConfig, Config, MailConfig, WeatherConfig};
use tourbook_common::error::GatewayError;
use tourbook_common::weather::city::City;
use tourbook_core::ports::{BookingBackend, Mailer, TemplateParams, WeatherProvider};
use tourbook_protocols::backend::RestBackend;
use tourbook_protocols::emailjs::EmailJsMailer;
use tourbook_protocols::openweather::OpenWeatherClient;

type Captured = Arc<Mutex<Vec<Value>>>;

async fn serve(app: Router) -> anyhow::Result<SocketAddr> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });
    Ok(addr)
}

async fn capture(State(captured): State<Captured>, Json(body): Json<Value>) -> StatusCode {
    captured.lock().unwrap().push(body);
    StatusCode::CREATED
}

fn api_config(addr: SocketAddr) -> ApiConfig {
    ApiConfig {
        base_url: format!("http://{addr}"),
        timeout: Duration::from_secs(5),
    }
}

#[tokio::test]
async fn rest_backend_reads_and_writes() -> anyhow::Result<()> {
    let captured: Captured = Captured::default();
    let app: Router = Router::new()
        .route(
            "/tours",
            get(|| async { Json(json!([{"id": "t1", "name": "Пекин", "description": "5 дней"}])) }),
        )
        .route(
            "/excursions",
            get(|| async { Json(json!([{"id": "wall", "name": "Стена", "tourIds": ["t1"]}])) }),
        )
        .route("/applications", post(capture))
        .with_state(captured.clone());
    let backend: RestBackend = RestBackend::new(&api_config(serve(app).await?))?;

    let tours: Vec<Tour> = backend.fetch_tours().await?;
    assert_eq!(tours[0].description, "5 дней");

    let excursions: Vec<Excursion> = backend.fetch_excursions().await?;
    assert!(excursions[0].is_offered_for("t1"));

    let application: Application = Application {
        email: "a@b.com".into(),
        name: "Ivan".into(),
        phone: "79001234567".into(),
        message: String::new(),
        tour_id: "t1".into(),
        excursion_ids: vec!["wall".into()],
        tourists: Vec::new(),
    };
    backend.submit_application(&application).await?;

    let bodies = captured.lock().unwrap().clone();
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["tourId"], "t1");
    assert_eq!(bodies[0]["excursionIds"], json!(["wall"]));
    Ok(())
}

#[tokio::test]
async fn non_success_status_is_reported() -> anyhow::Result<()> {
    let app: Router = Router::new()
        .route("/tours", get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }))
        .route("/excursions", get(|| async { "not json" }));
    let backend: RestBackend = RestBackend::new(&api_config(serve(app).await?))?;

    assert_eq!(
        backend.fetch_tours().await,
        Err(GatewayError::Status {
            code: 500,
            body: "boom".into()
        })
    );
    assert!(matches!(backend.fetch_excursions().await, Err(GatewayError::Decode(_))));
    Ok(())
}

#[tokio::test]
async fn unreachable_backend_is_a_connection_error() -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;
    drop(listener);

    let backend: RestBackend = RestBackend::new(&api_config(addr))?;

    assert!(matches!(backend.fetch_tours().await, Err(GatewayError::Connection(_))));
    Ok(())
}

#[tokio::test]
async fn emailjs_payload_shape() -> anyhow::Result<()> {
    let captured: Captured = Captured::default();
    let app: Router = Router::new()
        .route("/api/v1.0/email/send", post(capture))
        .with_state(captured.clone());
    let addr: SocketAddr = serve(app).await?;
    let mailer: EmailJsMailer = EmailJsMailer::new(
        MailConfig {
            endpoint: format!("http://{addr}/api/v1.0/email/send"),
            service_id: "service_1".into(),
            template_id: "template_1".into(),
            public_key: "public".into(),
        },
        Duration::from_secs(5),
    )?;
    let params: TemplateParams = [("user_email".to_string(), "a@b.com".to_string())].into();

    mailer.send(&params).await?;

    let bodies = captured.lock().unwrap().clone();
    assert_eq!(bodies[0]["template_id"], "template_1");
    assert_eq!(bodies[0]["user_id"], "public");
    assert_eq!(bodies[0]["template_params"]["user_email"], "a@b.com");
    Ok(())
}

#[tokio::test]
async fn openweather_query_and_decoding() -> anyhow::Result<()> {
    let app: Router = Router::new().route(
        "/weather",
        get(|Query(query): Query<HashMap<String, String>>| async move {
            if query.get("appid").map(String::as_str) != Some("key") || query.get("lang").map(String::as_str) != Some("ru") {
                return Err(StatusCode::UNAUTHORIZED);
            }
            Ok(Json(json!({
                "name": "Harbin",
                "main": {"temp": -18.4, "feels_like": -25.1, "humidity": 71},
                "weather": [{"main": "Snow", "description": "снег", "icon": "13d"}]
            })))
        }),
    );
    let addr: SocketAddr = serve(app).await?;
    let defaults: Config = Config::default();
    let client: OpenWeatherClient = OpenWeatherClient::new(
        WeatherConfig {
            url: format!("http://{addr}/weather"),
            api_key: "key".into(),
            ..defaults.weather
        },
        Duration::from_secs(5),
    )?;

    let report = client.current(&City::new("harbin", "Харбин", 45.8, 126.5)).await?;

    assert_eq!(report.city, "Харбин");
    assert_eq!(report.rounded_temperature(), -18);
    assert_eq!(report.rounded_feels_like(), -25);
    assert_eq!(report.summary, "Snow");
    Ok(())
}
