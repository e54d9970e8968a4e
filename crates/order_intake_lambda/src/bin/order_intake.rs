use lambda_runtime::{service_fn, Error, LambdaEvent};
use order_intake_core::stamp::SystemStamper;
use order_intake_lambda::adapters::dynamodb::DynamoOrderStore;
use order_intake_lambda::config::IntakeConfig;
use order_intake_lambda::handlers::intake::{
    handle_order_event, ApiGatewayResponse, InvocationMeta,
};
use order_intake_lambda::logging::init_logging;
use serde_json::Value;

async fn handle_request(
    store: &DynamoOrderStore,
    event: LambdaEvent<Value>,
) -> Result<ApiGatewayResponse, Error> {
    let invocation = InvocationMeta::new(event.context.request_id);
    Ok(handle_order_event(event.payload, &invocation, &SystemStamper, store))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = IntakeConfig::from_env();
    init_logging(config.log_format);

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let store = DynamoOrderStore::new(
        config.table_name,
        aws_sdk_dynamodb::Client::new(&aws_config),
    );
    tracing::info!(table_name = %store.table_name(), "order intake runtime ready");

    let store = &store;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handle_request(store, event).await
    }))
    .await
}
