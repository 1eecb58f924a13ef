use std::{error::Error, io::ErrorKind, path::PathBuf};

use ai_llm_service::telemetry;
use tracing::{Level, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables from .env file.
    // A missing file is fine; an unreadable or invalid one is not.
    let dotenv = optional_env_file(dotenvy::dotenv())?;

    tracing_subscriber::registry()
        .with(telemetry::env_filter_with_level("info", Level::INFO))
        .with(telemetry::app_layer())
        .with(telemetry::layer())
        .init();

    if let Some(path) = dotenv {
        info!(path = %path.display(), "loaded environment file");
    }

    api::start().await?;

    Ok(())
}

/// Maps "no .env file" to `Ok(None)` and keeps every other error.
fn optional_env_file(
    loaded: Result<PathBuf, dotenvy::Error>,
) -> Result<Option<PathBuf>, dotenvy::Error> {
    match loaded {
        Ok(path) => Ok(Some(path)),
        Err(dotenvy::Error::Io(err)) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn missing_env_file_is_ignored() {
        let missing = Err(dotenvy::Error::Io(io::Error::from(ErrorKind::NotFound)));
        assert!(matches!(optional_env_file(missing), Ok(None)));

        let found = Ok(PathBuf::from("/srv/app/.env"));
        assert_eq!(
            optional_env_file(found).unwrap(),
            Some(PathBuf::from("/srv/app/.env"))
        );
    }

    #[test]
    fn malformed_or_unreadable_env_file_is_an_error() {
        let malformed = Err(dotenvy::Error::LineParse("GROQ_API_KEY='gsk".into(), 13));
        assert!(matches!(
            optional_env_file(malformed),
            Err(dotenvy::Error::LineParse(..))
        ));

        let denied = Err(dotenvy::Error::Io(io::Error::from(ErrorKind::PermissionDenied)));
        assert!(matches!(optional_env_file(denied), Err(dotenvy::Error::Io(_))));
    }
}
