use axum::{
    Router,
    extract::{Json, Query},
    http::{HeaderValue, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{debug, info};

use crate::core::{
    CompanySize, FormInput, Gender, Qualification, Region, Report, SearchConfig, SimulationInput,
    MAX_SEARCH_CANDIDATES, build_report, min_disabled_for_workers, normalize, policy, qualify,
    reference_table, severe_min,
};
use crate::error::{CliError, InputError};
use crate::format::render_report;

const INDEX_HTML: &str = include_str!("../../web/index.html");
const STYLES_CSS: &str = include_str!("../../web/styles.css");
const APP_JS: &str = include_str!("../../web/app.js");

const MAX_GROWTH_PERCENT: f64 = 30.0;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliGender {
    Male,
    Female,
    Mixed,
}

impl From<CliGender> for Gender {
    fn from(value: CliGender) -> Self {
        match value {
            CliGender::Male => Gender::Male,
            CliGender::Female => Gender::Female,
            CliGender::Mixed => Gender::Mixed,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliCompanySize {
    Sme,
    MidSize,
    Large,
}

impl From<CliCompanySize> for CompanySize {
    fn from(value: CliCompanySize) -> Self {
        match value {
            CliCompanySize::Sme => CompanySize::Sme,
            CliCompanySize::MidSize => CompanySize::MidSize,
            CliCompanySize::Large => CompanySize::Large,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliRegion {
    Metro,
    NonMetro,
}

impl From<CliRegion> for Region {
    fn from(value: CliRegion) -> Self {
        match value {
            CliRegion::Metro => Region::Metro,
            CliRegion::NonMetro => Region::NonMetro,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiGender {
    #[serde(alias = "남성")]
    Male,
    #[serde(alias = "여성")]
    Female,
    #[serde(alias = "혼합")]
    Mixed,
}

impl From<ApiGender> for CliGender {
    fn from(value: ApiGender) -> Self {
        match value {
            ApiGender::Male => CliGender::Male,
            ApiGender::Female => CliGender::Female,
            ApiGender::Mixed => CliGender::Mixed,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiCompanySize {
    #[serde(alias = "중소기업", alias = "SME")]
    Sme,
    #[serde(alias = "midSize", alias = "mid_size", alias = "중견기업")]
    MidSize,
    #[serde(alias = "대기업")]
    Large,
}

impl From<ApiCompanySize> for CliCompanySize {
    fn from(value: ApiCompanySize) -> Self {
        match value {
            ApiCompanySize::Sme => CliCompanySize::Sme,
            ApiCompanySize::MidSize => CliCompanySize::MidSize,
            ApiCompanySize::Large => CliCompanySize::Large,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiRegion {
    #[serde(alias = "수도권", alias = "capital")]
    Metro,
    #[serde(alias = "nonMetro", alias = "non_metro", alias = "지방", alias = "local")]
    NonMetro,
}

impl From<ApiRegion> for CliRegion {
    fn from(value: ApiRegion) -> Self {
        match value {
            ApiRegion::Metro => CliRegion::Metro,
            ApiRegion::NonMetro => CliRegion::NonMetro,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SimulatePayload {
    #[serde(alias = "existingWorkers")]
    non_disabled: Option<u32>,
    disabled_count: Option<u32>,
    severe_count: Option<u32>,
    daily_hours: Option<u32>,
    weekly_days: Option<u32>,
    gender: Option<ApiGender>,
    company_size: Option<ApiCompanySize>,
    region: Option<ApiRegion>,
    annual_tax: Option<i64>,
    growth_rate: Option<f64>,
    use_grant: Option<bool>,
    operation_years: Option<u32>,
    service_cost: Option<i64>,
    service_reduction: Option<u32>,
    max_candidates: Option<u32>,
    deficit_streak: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct QualifyQuery {
    non_disabled: Option<u32>,
}

#[derive(Parser, Debug)]
#[command(
    name = "workplace-sim",
    about = "Cost-benefit simulator for a disability-inclusive standard workplace"
)]
struct Cli {
    #[arg(long, default_value_t = 5, help = "Existing non-disabled workers")]
    existing_workers: u32,
    #[arg(long, help = "Disabled workers; defaults to the statutory minimum")]
    disabled_count: Option<u32>,
    #[arg(long, help = "Severely disabled workers; defaults to the statutory minimum")]
    severe_count: Option<u32>,
    #[arg(long, default_value_t = 4)]
    daily_hours: u32,
    #[arg(long, default_value_t = 5)]
    weekly_days: u32,
    #[arg(long, value_enum, default_value_t = CliGender::Mixed)]
    gender: CliGender,
    #[arg(long, value_enum, default_value_t = CliCompanySize::Sme)]
    company_size: CliCompanySize,
    #[arg(
        long,
        value_enum,
        default_value_t = CliRegion::Metro,
        help = "Only affects the SME credit schedule"
    )]
    region: CliRegion,
    #[arg(
        long,
        default_value_t = 30_000,
        help = "Annual corporate/income tax in units of 10,000 won"
    )]
    annual_tax: i64,
    #[arg(
        long,
        default_value_t = 3.5,
        help = "Yearly minimum wage growth in percent"
    )]
    wage_growth_rate: f64,
    #[arg(long, help = "Apply for the start-up grant (extends the term to 7 years)")]
    use_grant: bool,
    #[arg(long, default_value_t = 10)]
    years: u32,
    #[arg(
        long,
        default_value_t = 0,
        help = "Monthly service cost replaced by the workplace, in units of 10,000 won"
    )]
    service_cost: i64,
    #[arg(long, default_value_t = 50, help = "Service cost reduction in percent")]
    service_reduction: u32,
    #[arg(long, default_value_t = crate::core::MAX_SEARCH_CANDIDATES)]
    max_candidates: u32,
    #[arg(long, default_value_t = crate::core::DEFICIT_STREAK_LIMIT)]
    deficit_streak: u32,
    #[arg(long, help = "Print the report as JSON")]
    json: bool,
}

#[derive(Debug)]
struct ApiRequest {
    inputs: SimulationInput,
    search: SearchConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SimulateResponse {
    input: SimulationInput,
    report: Report,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QualifyResponse {
    qualification: Qualification,
    reference: Vec<Qualification>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn check_range(option: &'static str, value: u32, (min, max): (u32, u32)) -> Result<(), InputError> {
    if !(min..=max).contains(&value) {
        return Err(InputError::OutOfRange {
            option,
            min: min as f64,
            max: max as f64,
            value: value as f64,
        });
    }
    Ok(())
}

fn check_won_range(option: &'static str, value: i64, max: i64) -> Result<(), InputError> {
    if value < 0 {
        return Err(InputError::Negative { option });
    }
    if value > max {
        return Err(InputError::OutOfRange {
            option,
            min: 0.0,
            max: max as f64,
            value: value as f64,
        });
    }
    Ok(())
}

fn build_inputs(cli: &Cli) -> Result<SimulationInput, InputError> {
    check_range(
        "--existing-workers",
        cli.existing_workers,
        (0, policy::MAX_EXISTING_WORKERS),
    )?;
    check_range("--daily-hours", cli.daily_hours, policy::DAILY_HOURS_RANGE)?;
    check_range("--weekly-days", cli.weekly_days, policy::WEEKLY_DAYS_RANGE)?;
    check_range("--years", cli.years, (1, policy::OPERATION_YEARS_MAX))?;
    check_range(
        "--service-reduction",
        cli.service_reduction,
        policy::SERVICE_REDUCTION_RANGE,
    )?;

    check_won_range("--annual-tax", cli.annual_tax, policy::MAX_ANNUAL_TAX_MANWON)?;
    check_won_range("--service-cost", cli.service_cost, policy::MAX_SERVICE_COST_MANWON)?;
    for (option, count) in [
        ("--disabled-count", cli.disabled_count),
        ("--severe-count", cli.severe_count),
    ] {
        if let Some(count) = count {
            check_range(option, count, (0, policy::MAX_DISABLED_COUNT))?;
        }
    }
    if !cli.wage_growth_rate.is_finite() {
        return Err(InputError::NotFinite {
            option: "--wage-growth-rate",
        });
    }
    if !(-MAX_GROWTH_PERCENT..=MAX_GROWTH_PERCENT).contains(&cli.wage_growth_rate) {
        return Err(InputError::OutOfRange {
            option: "--wage-growth-rate",
            min: -MAX_GROWTH_PERCENT,
            max: MAX_GROWTH_PERCENT,
            value: cli.wage_growth_rate,
        });
    }

    let disabled_count = cli
        .disabled_count
        .unwrap_or_else(|| min_disabled_for_workers(cli.existing_workers));
    let severe_count = cli
        .severe_count
        .unwrap_or_else(|| severe_min(cli.existing_workers + disabled_count));

    let form = FormInput {
        existing_workers: cli.existing_workers,
        disabled_count,
        severe_count,
        daily_hours: cli.daily_hours,
        weekly_days: cli.weekly_days,
        gender: cli.gender.into(),
        company_size: cli.company_size.into(),
        region: cli.region.into(),
        annual_tax_manwon: cli.annual_tax,
        wage_growth_percent: cli.wage_growth_rate,
        use_grant: cli.use_grant,
        operation_years: cli.years,
        service_cost_manwon: cli.service_cost,
        service_reduction_percent: cli.service_reduction,
    };
    Ok(normalize(&form))
}

fn build_search_config(cli: &Cli) -> Result<SearchConfig, InputError> {
    check_range("--max-candidates", cli.max_candidates, (1, MAX_SEARCH_CANDIDATES))?;
    check_range("--deficit-streak", cli.deficit_streak, (1, MAX_SEARCH_CANDIDATES))?;
    Ok(SearchConfig {
        max_candidates: cli.max_candidates,
        deficit_streak: cli.deficit_streak,
        ..SearchConfig::default()
    })
}

/// Runs one CLI invocation and returns what should be printed on stdout.
pub fn run_cli<I, T>(args: I) -> Result<String, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    let inputs = build_inputs(&cli)?;
    let search = build_search_config(&cli)?;
    let report = build_report(&inputs, search);

    if cli.json {
        let response = SimulateResponse {
            input: inputs,
            report,
        };
        return Ok(serde_json::to_string_pretty(&response)?);
    }
    Ok(render_report(&inputs, &report))
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route("/", get(index_handler))
        .route("/index.html", get(index_handler))
        .route("/styles.css", get(styles_handler))
        .route("/app.js", get(app_js_handler))
        .route(
            "/api/simulate",
            get(simulate_get_handler).post(simulate_post_handler),
        )
        .route("/api/qualify", get(qualify_handler))
        .fallback(not_found_handler);

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "workplace simulator listening");
    info!("local access: http://127.0.0.1:{port}/");

    axum::serve(listener, app).await
}

async fn index_handler() -> impl IntoResponse {
    with_cache_control(Html(INDEX_HTML))
}

async fn styles_handler() -> impl IntoResponse {
    with_cache_control((
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        STYLES_CSS,
    ))
}

async fn app_js_handler() -> impl IntoResponse {
    with_cache_control((
        [(
            header::CONTENT_TYPE,
            "application/javascript; charset=utf-8",
        )],
        APP_JS,
    ))
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn simulate_get_handler(Query(payload): Query<SimulatePayload>) -> Response {
    simulate_handler_impl(payload).await
}

async fn simulate_post_handler(Json(payload): Json<SimulatePayload>) -> Response {
    simulate_handler_impl(payload).await
}

async fn simulate_handler_impl(payload: SimulatePayload) -> Response {
    let request = match api_request_from_payload(payload) {
        Ok(request) => request,
        Err(err) => return error_response(StatusCode::BAD_REQUEST, &err.to_string()),
    };
    debug!(
        disabled = request.inputs.disabled_count,
        existing = request.inputs.existing_workers,
        years = request.inputs.years,
        "simulate request"
    );

    let report = build_report(&request.inputs, request.search);
    json_response(
        StatusCode::OK,
        SimulateResponse {
            input: request.inputs,
            report,
        },
    )
}

async fn qualify_handler(Query(query): Query<QualifyQuery>) -> Response {
    match qualify_response(query) {
        Ok(body) => json_response(StatusCode::OK, body),
        Err(err) => error_response(StatusCode::BAD_REQUEST, &err.to_string()),
    }
}

fn qualify_response(query: QualifyQuery) -> Result<QualifyResponse, InputError> {
    let non_disabled = query.non_disabled.unwrap_or(5);
    check_range(
        "nonDisabled",
        non_disabled,
        (0, policy::MAX_EXISTING_WORKERS),
    )?;
    Ok(QualifyResponse {
        qualification: qualify(non_disabled),
        reference: reference_table(),
    })
}

fn with_cache_control<R: IntoResponse>(response: R) -> Response {
    let mut response = response.into_response();
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    with_cache_control((status, Json(body)))
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

#[cfg(test)]
fn api_request_from_json(json: &str) -> Result<ApiRequest, InputError> {
    let payload = serde_json::from_str::<SimulatePayload>(json)
        .map_err(|e| InputError::Payload(e.to_string()))?;
    api_request_from_payload(payload)
}

fn api_request_from_payload(payload: SimulatePayload) -> Result<ApiRequest, InputError> {
    let mut cli = default_cli_for_api();

    if let Some(v) = payload.non_disabled {
        cli.existing_workers = v;
    }
    cli.disabled_count = payload.disabled_count;
    cli.severe_count = payload.severe_count;
    if let Some(v) = payload.daily_hours {
        cli.daily_hours = v;
    }
    if let Some(v) = payload.weekly_days {
        cli.weekly_days = v;
    }
    if let Some(v) = payload.gender {
        cli.gender = v.into();
    }
    if let Some(v) = payload.company_size {
        cli.company_size = v.into();
    }
    if let Some(v) = payload.region {
        cli.region = v.into();
    }
    if let Some(v) = payload.annual_tax {
        cli.annual_tax = v;
    }
    if let Some(v) = payload.growth_rate {
        cli.wage_growth_rate = v;
    }
    if let Some(v) = payload.use_grant {
        cli.use_grant = v;
    }
    if let Some(v) = payload.operation_years {
        cli.years = v;
    }
    if let Some(v) = payload.service_cost {
        cli.service_cost = v;
    }
    if let Some(v) = payload.service_reduction {
        cli.service_reduction = v;
    }
    if let Some(v) = payload.max_candidates {
        cli.max_candidates = v;
    }
    if let Some(v) = payload.deficit_streak {
        cli.deficit_streak = v;
    }

    let inputs = build_inputs(&cli)?;
    let search = build_search_config(&cli)?;
    Ok(ApiRequest { inputs, search })
}

fn default_cli_for_api() -> Cli {
    Cli {
        existing_workers: 5,
        disabled_count: None,
        severe_count: None,
        daily_hours: 4,
        weekly_days: 5,
        gender: CliGender::Mixed,
        company_size: CliCompanySize::Sme,
        region: CliRegion::Metro,
        annual_tax: 30_000,
        wage_growth_rate: 3.5,
        use_grant: false,
        years: 10,
        service_cost: 0,
        service_reduction: 50,
        max_candidates: crate::core::MAX_SEARCH_CANDIDATES,
        deficit_streak: crate::core::DEFICIT_STREAK_LIMIT,
        json: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SearchEnd;

    fn sample_cli() -> Cli {
        default_cli_for_api()
    }

    #[test]
    fn default_cli_matches_parsed_defaults() {
        let parsed = Cli::try_parse_from(["workplace-sim"]).expect("defaults parse");
        let defaults = sample_cli();
        assert_eq!(parsed.existing_workers, defaults.existing_workers);
        assert_eq!(parsed.daily_hours, defaults.daily_hours);
        assert_eq!(parsed.gender, defaults.gender);
        assert_eq!(parsed.annual_tax, defaults.annual_tax);
        assert_eq!(parsed.years, defaults.years);
        assert_eq!(parsed.service_reduction, defaults.service_reduction);
        assert!(!parsed.json);
    }

    #[test]
    fn build_inputs_fills_statutory_minimums() {
        let inputs = build_inputs(&sample_cli()).expect("valid inputs");
        assert_eq!(inputs.disabled_count, 10);
        assert_eq!(inputs.severe_count, 3);
        assert_eq!(inputs.annual_tax, 300_000_000);
        assert_eq!(inputs.years, 10);
        assert!((inputs.wage_growth_rate - 0.035).abs() < 1e-12);
    }

    #[test]
    fn build_inputs_raises_term_for_grant() {
        let mut cli = sample_cli();
        cli.use_grant = true;
        cli.years = 5;
        let inputs = build_inputs(&cli).expect("valid inputs");
        assert_eq!(inputs.years, 7);
    }

    #[test]
    fn build_inputs_rejects_out_of_range_hours() {
        let mut cli = sample_cli();
        cli.daily_hours = 9;
        let err = build_inputs(&cli).expect_err("must reject 9h days");
        assert!(err.to_string().contains("--daily-hours"));
    }

    #[test]
    fn build_inputs_rejects_non_finite_growth() {
        let mut cli = sample_cli();
        cli.wage_growth_rate = f64::INFINITY;
        let err = build_inputs(&cli).expect_err("must reject infinite growth");
        assert_eq!(
            err,
            InputError::NotFinite {
                option: "--wage-growth-rate"
            }
        );
    }

    #[test]
    fn build_inputs_rejects_negative_tax() {
        let mut cli = sample_cli();
        cli.annual_tax = -1;
        let err = build_inputs(&cli).expect_err("must reject negative tax");
        assert!(err.to_string().contains("--annual-tax"));
    }

    #[test]
    fn api_payload_accepts_korean_labels() {
        let request = api_request_from_json(
            r#"{"nonDisabled":100,"gender":"여성","companySize":"중견기업","region":"지방"}"#,
        )
        .expect("valid payload");
        assert_eq!(request.inputs.existing_workers, 100);
        assert_eq!(request.inputs.disabled_count, 43);
        assert_eq!(request.inputs.severe_count, 20);
        assert_eq!(request.inputs.gender, Gender::Female);
        assert_eq!(request.inputs.company_size, CompanySize::MidSize);
        assert_eq!(request.inputs.region, Region::NonMetro);
    }

    #[test]
    fn api_payload_accepts_camel_case_aliases() {
        let request = api_request_from_json(
            r#"{"existingWorkers":30,"companySize":"midSize","region":"nonMetro","useGrant":true}"#,
        )
        .expect("valid payload");
        assert_eq!(request.inputs.existing_workers, 30);
        assert_eq!(request.inputs.disabled_count, 13);
        assert_eq!(request.inputs.years, 10);
        assert!(request.inputs.use_grant);
    }

    #[test]
    fn api_payload_rejects_unknown_enum() {
        let err = api_request_from_json(r#"{"gender":"other"}"#).expect_err("must reject");
        assert!(matches!(err, InputError::Payload(_)));
    }

    #[test]
    fn api_payload_overrides_search_config() {
        let request =
            api_request_from_json(r#"{"maxCandidates":40,"deficitStreak":5}"#).expect("valid");
        assert_eq!(request.search.max_candidates, 40);
        assert_eq!(request.search.deficit_streak, 5);
        assert_eq!(request.search.severe_share_percent, 30);

        let err = api_request_from_json(r#"{"maxCandidates":0}"#).expect_err("must reject");
        assert!(err.to_string().contains("--max-candidates"));

        let err = api_request_from_json(r#"{"maxCandidates":501}"#).expect_err("above ceiling");
        assert!(matches!(
            err,
            InputError::OutOfRange {
                option: "--max-candidates",
                ..
            }
        ));
    }

    #[test]
    fn api_payload_rejects_term_beyond_relief_schedule() {
        let request = api_request_from_json(r#"{"operationYears":10}"#).expect("valid");
        assert_eq!(request.inputs.years, 10);

        let err = api_request_from_json(r#"{"operationYears":11}"#).expect_err("must reject");
        assert!(err.to_string().contains("--years"));
    }

    #[test]
    fn simulate_response_uses_camel_case_fields() {
        let request = api_request_from_json(
            r#"{"annualTax":30000,"operationYears":5,"growthRate":3.5}"#,
        )
        .expect("valid payload");
        let report = build_report(&request.inputs, request.search);
        let response = SimulateResponse {
            input: request.inputs,
            report,
        };
        let json = serde_json::to_value(&response).expect("serializable");

        assert_eq!(json["input"]["disabledCount"], 10);
        assert_eq!(json["input"]["companySize"], "sme");
        assert_eq!(json["report"]["rows"][0]["rateLabel"], "100%");
        assert_eq!(json["report"]["rows"][0]["hourlyWage"], 10_320);
        assert_eq!(json["report"]["finalCumulative"], 579_505_856_i64);
        assert_eq!(json["report"]["search"]["endReason"], "deficit-onset");
        assert_eq!(json["report"]["breakdown"]["incentive"]["mildEligible"], 6);
        assert!(json["report"]["periodSums"].is_array());
    }

    #[test]
    fn qualify_response_reports_reference_table() {
        let body = qualify_response(QualifyQuery {
            non_disabled: Some(100),
        })
        .expect("valid query");
        assert_eq!(body.qualification.min_disabled, 43);
        assert_eq!(body.reference.len(), crate::core::REFERENCE_HEADCOUNTS.len());

        let err = qualify_response(QualifyQuery {
            non_disabled: Some(501),
        })
        .expect_err("must reject");
        assert!(err.to_string().contains("nonDisabled"));
    }

    #[test]
    fn run_cli_prints_text_and_json() {
        let text = run_cli(["workplace-sim", "--years", "5"]).expect("text report");
        assert!(text.contains("1~3년차 (100%)"));

        let json = run_cli(["workplace-sim", "--json", "--years", "5", "--annual-tax", "0"])
            .expect("json report");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["report"]["rows"].as_array().map(Vec::len), Some(5));
        assert_eq!(
            value["report"]["search"]["endReason"],
            serde_json::to_value(SearchEnd::Exhausted).expect("serializable")
        );
    }

    #[test]
    fn run_cli_surfaces_argument_and_input_errors() {
        let err = run_cli(["workplace-sim", "--gender", "unknown"]).expect_err("bad enum");
        assert!(matches!(err, CliError::Args(_)));

        let err = run_cli(["workplace-sim", "--weekly-days", "7"]).expect_err("bad days");
        assert!(matches!(err, CliError::Input(InputError::OutOfRange { .. })));
    }

    #[test]
    fn run_cli_rejects_amounts_and_counts_past_form_limits() {
        for args in [
            ["workplace-sim", "--annual-tax", "1000000000000000"],
            ["workplace-sim", "--service-cost", "100001"],
            ["workplace-sim", "--disabled-count", "200000000"],
            ["workplace-sim", "--severe-count", "4294967295"],
        ] {
            let err = run_cli(args).expect_err("must reject");
            assert!(
                matches!(err, CliError::Input(InputError::OutOfRange { option, .. }) if option == args[1]),
                "{args:?}"
            );
        }

        let text = run_cli(["workplace-sim", "--annual-tax", "1000000", "--disabled-count", "1000"])
            .expect("limits are inclusive");
        assert!(text.contains("1~3년차"));
    }
}
