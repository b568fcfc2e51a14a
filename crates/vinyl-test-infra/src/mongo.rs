use crate::Result;
use testcontainers::core::{IntoContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, GenericImage};
use typed_builder::TypedBuilder;

const MONGO_PORT: u16 = 27017;

#[derive(TypedBuilder)]
pub struct MongoConfig {
    #[builder(default = "7.0".to_string())]
    tag: String,
    #[builder(default = "vinyl".to_string())]
    database: String,
}

/// Test fixture for a disposable MongoDB server.
pub struct MongoServer {
    container: ContainerAsync<GenericImage>,
    config: MongoConfig,
}

impl MongoServer {
    /// Starts a standalone MongoDB container suitable for integration tests.
    pub async fn new(config: MongoConfig) -> Result<Self> {
        let container = GenericImage::new("mongo", config.tag.as_str())
            .with_exposed_port(MONGO_PORT.tcp())
            .with_wait_for(WaitFor::message_on_stdout("Waiting for connections"))
            .start()
            .await?;

        Ok(Self { container, config })
    }

    pub async fn host(&self) -> Result<String> {
        let host = self.container.get_host().await?.to_string();
        Ok(match host.as_str() {
            "localhost" => String::from("127.0.0.1"),
            _ => host,
        })
    }

    pub async fn port(&self) -> Result<u16> {
        Ok(self.container.get_host_port_ipv4(MONGO_PORT).await?)
    }

    /// Connection string for the container, without a database path.
    pub async fn uri(&self) -> Result<String> {
        let host = self.host().await?;
        let port = self.port().await?;
        Ok(format!("mongodb://{}:{}", host, port))
    }

    /// Database name tests are expected to use.
    pub fn database(&self) -> &str {
        &self.config.database
    }

    /// Returns the underlying container reference.
    pub fn container(&self) -> &ContainerAsync<GenericImage> {
        &self.container
    }
}
