use chrono::NaiveDate;
use rocket::http::{ContentType, Status};
use rocket::State;

use strava_summary::config::Settings;
use strava_summary::data_types::summary::stats::Metric;
use strava_summary::error::SummaryError;
use strava_summary::processors::cohort::CohortFilter;
use strava_summary::App;

#[macro_use]
extern crate rocket;

use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Header;
use rocket::{Request, Response};

const SETTINGS_FILE: &str = "summary.toml";

pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Cross-Origin-Resource-Sharing Fairing",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, PATCH, PUT, DELETE, HEAD, OPTIONS, GET",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
        response.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
    }
}

#[options("/<_..>")]
fn all_options() {
    /* Intentionally left empty */
}

fn json_ok<T: serde::Serialize>(value: &T) -> (Status, (ContentType, String)) {
    match serde_json::to_string(value) {
        Ok(json) => (Status::Ok, (ContentType::JSON, json)),
        Err(err) => (Status::InternalServerError, (ContentType::Text, err.to_string())),
    }
}

fn error_response(err: SummaryError) -> (Status, (ContentType, String)) {
    (Status::BadRequest, (ContentType::Text, err.to_string()))
}

fn parse_date(raw: &str) -> Result<NaiveDate, SummaryError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| SummaryError::InvalidDate(raw.to_string()))
}

fn build_filter(
    sports: Option<String>,
    year: Option<i32>,
    start: Option<String>,
    end: Option<String>,
) -> Result<CohortFilter, SummaryError> {
    let sport_types = sports
        .map(|list| {
            list.split(',')
                .map(|sport| sport.trim().to_string())
                .filter(|sport| !sport.is_empty())
                .collect::<Vec<_>>()
        })
        .filter(|sports| !sports.is_empty());

    let date_range = match (start, end) {
        (Some(start), Some(end)) => Some((parse_date(&start)?, parse_date(&end)?)),
        (None, None) => None,
        _ => return Err(SummaryError::IncompleteDateRange),
    };

    Ok(CohortFilter {
        sport_types,
        year,
        date_range,
    })
}

#[get("/activities")]
fn activities(app: &State<App>) -> (Status, (ContentType, String)) {
    json_ok(&app.activities())
}

#[get("/activities/<act_id>")]
fn activity(app: &State<App>, act_id: i64) -> (Status, (ContentType, String)) {
    match app.activity(act_id) {
        Some(record) => json_ok(record),
        None => (Status::NotFound, (ContentType::Text, String::new())),
    }
}

#[get("/overview")]
fn overview(app: &State<App>) -> (Status, (ContentType, String)) {
    json_ok(&app.overview())
}

#[get("/top?<metric>&<count>&<sports>&<start>&<end>")]
fn top(
    app: &State<App>,
    metric: Option<String>,
    count: Option<usize>,
    sports: Option<String>,
    start: Option<String>,
    end: Option<String>,
) -> (Status, (ContentType, String)) {
    let metric_key = metric.unwrap_or_else(|| "distance_km".to_string());

    let metric = match Metric::from_key(&metric_key) {
        Some(metric) => metric,
        None => return error_response(SummaryError::UnknownMetric(metric_key)),
    };

    let filter = match build_filter(sports, None, start, end) {
        Ok(filter) => filter,
        Err(err) => return error_response(err),
    };

    json_ok(&app.top_activities(&filter, metric, count.unwrap_or(10)))
}

#[get("/performance/<act_id>?<sports>&<year>&<start>&<end>")]
fn performance(
    app: &State<App>,
    act_id: i64,
    sports: Option<String>,
    year: Option<i32>,
    start: Option<String>,
    end: Option<String>,
) -> (Status, (ContentType, String)) {
    let filter = match build_filter(sports, year, start, end) {
        Ok(filter) => filter,
        Err(err) => return error_response(err),
    };

    match app.performance(&filter, act_id) {
        Some(scores) => json_ok(&scores),
        None => (Status::NotFound, (ContentType::Text, String::new())),
    }
}

#[get("/radial/<act_id>?<sports>&<year>&<start>&<end>")]
fn radial(
    app: &State<App>,
    act_id: i64,
    sports: Option<String>,
    year: Option<i32>,
    start: Option<String>,
    end: Option<String>,
) -> (Status, (ContentType, String)) {
    let filter = match build_filter(sports, year, start, end) {
        Ok(filter) => filter,
        Err(err) => return error_response(err),
    };

    match app.radial(&filter, act_id) {
        Some(points) => json_ok(&points),
        None => (Status::NotFound, (ContentType::Text, String::new())),
    }
}

#[get("/compare?<sport>&<year>&<start>&<end>")]
fn compare(
    app: &State<App>,
    sport: Option<String>,
    year: Option<i32>,
    start: Option<String>,
    end: Option<String>,
) -> (Status, (ContentType, String)) {
    let (start, end) = match (start, end) {
        (Some(start), Some(end)) => (start, end),
        _ => return error_response(SummaryError::IncompleteDateRange),
    };

    let start = match parse_date(&start) {
        Ok(date) => date,
        Err(err) => return error_response(err),
    };

    let end = match parse_date(&end) {
        Ok(date) => date,
        Err(err) => return error_response(err),
    };

    // The comparator applies the date windows itself; the filter only
    // scopes the cohort to sport and year.
    let filter = CohortFilter {
        sport_types: sport.map(|sport| vec![sport]),
        year,
        date_range: None,
    };

    match app.compare(&filter, start, end) {
        Ok(rows) => json_ok(&rows),
        Err(err) => error_response(err),
    }
}

/// A remote failure still brings the dashboard up, over an empty table, so
/// the views render their empty states. Input errors halt instead.
fn load_app() -> App {
    let settings = match Settings::from_file(SETTINGS_FILE) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    match App::from_settings(&settings, SETTINGS_FILE) {
        Ok(app) => app,
        Err(err) => match err {
            SummaryError::Remote { .. }
            | SummaryError::Http(_)
            | SummaryError::MalformedResponse(_) => {
                eprintln!("{}", err);
                App::from_records(Vec::new())
            }
            _ => {
                eprintln!("{}", err);
                std::process::exit(1);
            }
        },
    }
}

#[rocket::main]
async fn main() {
    let app = load_app();

    let result = rocket::build()
        .manage(app)
        .attach(Cors)
        .mount(
            "/",
            routes![
                activities,
                activity,
                overview,
                top,
                performance,
                radial,
                compare,
                all_options
            ],
        )
        .launch()
        .await;

    if let Err(err) = result {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
