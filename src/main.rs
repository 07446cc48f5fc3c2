use s3_presign::issue_presigned_url;
use tracing::info;
use tracing_subscriber::EnvFilter;

const OBJECT_LAMBDA_ACCESS_POINT: &str =
    "arn:aws:s3-object-lambda:eu-west-1:682179218046:accesspoint/objectlambdaaccesspoint55ec2237-8esptmyz4dvq";
const OBJECT_KEY: &str = "barely-moving-louse";

#[tokio::main]
async fn main() {
    // Logs go to stderr; stdout is reserved for the URL or the failure line
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Requesting presigned URL for {}", OBJECT_KEY);

    if let Some(url) = issue_presigned_url(OBJECT_LAMBDA_ACCESS_POINT, OBJECT_KEY, None).await {
        println!("Presigned URL: {}", url);
    }
}
