use models::Customer;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String, pub customers: usize }

#[derive(ToSchema)]
pub struct ErrorResponse { pub error: String, pub message: Option<String> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::customers::create_customer,
        crate::routes::customers::get_all_customers,
        crate::routes::customers::get_customer_by_id,
    ),
    components(
        schemas(
            Customer,
            HealthResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "health"),
        (name = "customers")
    )
)]
pub struct ApiDoc;
