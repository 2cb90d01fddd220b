use std::io;

use actix_cors::Cors;
use actix_web::{get, middleware, put, web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use log::{error, info};
use serde::Deserialize;

use rands_core::{chars, Error, Generator, GeneratorConfig};

/// Longest output the stateless endpoint accepts to build.
const MAX_LENGTH: usize = 4096;

/// Server settings, read from the command line or the environment.
#[derive(Parser, Debug)]
#[command(version, about = "HTTP front-end for random string generation")]
struct Args {
	/// Address to bind
	#[arg(long, env = "RANDS_HOST", default_value = "127.0.0.1")]
	host: String,

	/// Port to bind
	#[arg(long, env = "RANDS_PORT", default_value_t = 5000)]
	port: u16,

	/// Number of strings the buffered generator keeps ready
	#[arg(long, env = "RANDS_CAPACITY", default_value_t = 100)]
	capacity: usize,

	/// Minimum buffered string length (included)
	#[arg(long, env = "RANDS_MIN", default_value_t = 8)]
	min: usize,

	/// Maximum buffered string length (excluded)
	#[arg(long, env = "RANDS_MAX", default_value_t = 16)]
	max: usize,

	/// Comma-separated charsets of the buffered generator
	#[arg(long, env = "RANDS_CHARSETS", default_value = "alpha_number")]
	charsets: String,

	/// Fixed seed of the buffered generator (OS entropy if absent)
	#[arg(long, env = "RANDS_SEED")]
	seed: Option<u64>,
}

/// Query parameters of the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	min: Option<usize>,
	max: Option<usize>,
	charsets: Option<String>, // "lower_alpha,number"
	alphabet: Option<String>  // literal symbols, wins over charsets
}

#[derive(Deserialize)]
struct SeedParams {
	value: Option<u64>,
	scope: Option<String> // "buffered" (default) or "global"
}

struct SharedData {
	generator: Generator<u8>
}

/// Builds the union of the named charsets, in the given order.
///
/// Unknown names are an error. An empty list gives an empty alphabet,
/// which generation then rejects.
fn charset_union(names: &str) -> Result<Vec<u8>, String> {
	let mut alphabet = Vec::new();
	for name in names.split(',').map(str::trim).filter(|s| !s.is_empty()) {
		match chars::by_name(name) {
			Some(table) => alphabet.extend_from_slice(table),
			None => return Err(format!("Unknown charset '{name}'")),
		}
	}
	Ok(alphabet)
}

impl GenerateParams {
	/// Generates one string from the process-wide source.
	fn generate(&self) -> Result<String, String> {
		let min = self.min.unwrap_or(8);
		let max = self.max.unwrap_or(16);
		if max > MAX_LENGTH + 1 {
			return Err(format!("max must not exceed {}", MAX_LENGTH + 1));
		}

		let result = match &self.alphabet {
			Some(alphabet) => {
				let alphabet: Vec<char> = alphabet.chars().collect();
				rands_core::string(min, max, &alphabet)
			}
			None => {
				let alphabet = charset_union(self.charsets.as_deref().unwrap_or("alpha_number"))?;
				rands_core::string(min, max, &alphabet)
			}
		};
		result.map_err(|e| e.to_string())
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates one string from the query parameters, without buffering.
#[get("/v1/generate")]
async fn get_generated(query: web::Query<GenerateParams>) -> impl Responder {
	match query.generate() {
		Ok(result) => HttpResponse::Ok().body(result),
		Err(e) => HttpResponse::BadRequest().body(e),
	}
}

/// HTTP GET endpoint `/v1/buffered`
///
/// Takes one pre-generated string from the shared buffered generator.
#[get("/v1/buffered")]
async fn get_buffered(data: web::Data<SharedData>) -> impl Responder {
	let result = data.generator.string().await;
	if result.is_empty() {
		return HttpResponse::ServiceUnavailable().body("Generator is shut down");
	}
	HttpResponse::Ok().body(result)
}

#[get("/v1/charsets")]
async fn get_charsets() -> impl Responder {
	HttpResponse::Ok().body(chars::NAMES.join("\n"))
}

#[put("/v1/seed")]
async fn put_seed(data: web::Data<SharedData>, query: web::Query<SeedParams>) -> impl Responder {
	let value = match query.value {
		Some(value) => value,
		None => return HttpResponse::BadRequest().body("Missing seed value"),
	};

	match query.scope.as_deref().unwrap_or("buffered") {
		"buffered" => data.generator.reseed(value),
		"global" => rands_core::seed(value),
		other => return HttpResponse::BadRequest().body(format!("Unknown scope '{other}'")),
	}

	HttpResponse::Ok().body("Seed applied")
}

/// Main entry point for the server.
///
/// Starts the buffered generator, shares it between workers and serves
/// the HTTP API until the server stops.
///
/// # Notes
/// - Binds to `RANDS_HOST:RANDS_PORT` (127.0.0.1:5000 by default).
/// - The generator is shut down and its producer joined on exit.
#[actix_web::main]
async fn main() -> io::Result<()> {
	env_logger::init();
	let args = Args::parse();

	let alphabet = charset_union(&args.charsets).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
	let config = GeneratorConfig {
		seed: args.seed,
		capacity: args.capacity,
		min: args.min,
		max: args.max,
	};
	let (generator, producer) = Generator::spawn(&config, &alphabet)
		.map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

	let shared_data = web::Data::new(SharedData { generator });
	let server_data = shared_data.clone();

	info!("listening on {}:{}", args.host, args.port);
	let served = HttpServer::new(move || {
		App::new()
			.wrap(middleware::Logger::default())
			.wrap(Cors::default().allow_any_origin().allowed_methods(vec!["GET", "PUT"]))
			.app_data(server_data.clone())
			.service(get_generated)
			.service(get_buffered)
			.service(get_charsets)
			.service(put_seed)
	})
		.bind((args.host.as_str(), args.port))?
		.run()
		.await;

	shared_data.generator.shutdown();
	match producer.await {
		Ok(Err(Error::Cancelled)) => info!("buffered generator stopped"),
		Ok(other) => error!("buffered generator ended unexpectedly: {other:?}"),
		Err(e) => error!("buffered generator task failed: {e}"),
	}

	served
}

#[cfg(test)]
mod tests {
	use super::*;
	use actix_web::http::StatusCode;
	use actix_web::test as http_test;

	#[test]
	fn union_keeps_order_and_rejects_unknown_names() {
		let alphabet = charset_union("number, punct").unwrap();
		assert_eq!(&alphabet[..10], chars::number());
		assert!(charset_union("number,klingon").is_err());
		assert!(charset_union("").unwrap().is_empty());
	}

	#[actix_web::test]
	async fn generate_honours_parameters() {
		let app = http_test::init_service(App::new().service(get_generated)).await;

		let req = http_test::TestRequest::get().uri("/v1/generate?min=4&max=5&charsets=number").to_request();
		let body = http_test::call_and_read_body(&app, req).await;
		assert_eq!(body.len(), 4);
		assert!(body.iter().all(|b| b.is_ascii_digit()));

		let req = http_test::TestRequest::get().uri("/v1/generate?min=3&max=4&alphabet=%CE%B1").to_request();
		let body = http_test::call_and_read_body(&app, req).await;
		assert_eq!(std::str::from_utf8(&body).unwrap(), "ααα");
	}

	#[actix_web::test]
	async fn generate_rejects_invalid_arguments() {
		let app = http_test::init_service(App::new().service(get_generated)).await;

		for uri in [
			"/v1/generate?min=0&max=5",
			"/v1/generate?min=5&max=5",
			"/v1/generate?charsets=",
			"/v1/generate?charsets=klingon",
			"/v1/generate?min=1&max=100000",
		] {
			let req = http_test::TestRequest::get().uri(uri).to_request();
			let resp = http_test::call_service(&app, req).await;
			assert_eq!(resp.status(), 400, "{uri}");
		}
	}

	#[actix_web::test]
	async fn buffered_serves_until_shutdown() {
		let config = GeneratorConfig { seed: Some(1), capacity: 2, min: 6, max: 7 };
		let (generator, producer) = Generator::spawn(&config, chars::lower_alpha()).unwrap();
		let data = web::Data::new(SharedData { generator });
		let app = http_test::init_service(App::new().app_data(data.clone()).service(get_buffered).service(put_seed)).await;

		let req = http_test::TestRequest::get().uri("/v1/buffered").to_request();
		assert_eq!(http_test::call_and_read_body(&app, req).await.len(), 6);

		let req = http_test::TestRequest::put().uri("/v1/seed?value=5").to_request();
		assert_eq!(http_test::call_service(&app, req).await.status(), 200);
		let req = http_test::TestRequest::put().uri("/v1/seed?value=5&scope=moon").to_request();
		assert_eq!(http_test::call_service(&app, req).await.status(), 400);

		data.generator.shutdown();
		assert!(matches!(producer.await, Ok(Err(Error::Cancelled))));

		// At most `capacity` strings remain queued.
		let mut statuses = Vec::new();
		for _ in 0..3 {
			let req = http_test::TestRequest::get().uri("/v1/buffered").to_request();
			statuses.push(http_test::call_service(&app, req).await.status());
		}
		assert_eq!(statuses.last().copied(), Some(StatusCode::SERVICE_UNAVAILABLE));
	}
}
