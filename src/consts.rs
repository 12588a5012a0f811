pub mod cli_consts {
    //! Console Configuration Constants
    //!
    //! Grouped by functional area. Everything the dashboard needs to agree on
    //! with the classification service lives here.

    // =============================================================================
    // SERVER CONFIGURATION
    // =============================================================================

    /// Base URL used when no server is configured.
    pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

    /// Environment variable that overrides the configured server.
    pub const SERVER_ENV_VAR: &str = "DOCCLASS_SERVER";

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum number of buffered events between workers and the UI loop.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// HTTP client timeouts
    pub mod http {
        use std::time::Duration;

        pub const CONNECT_TIMEOUT_SECS: u64 = 10;
        pub const REQUEST_TIMEOUT_SECS: u64 = 30;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    /// Dashboard refresh configuration
    pub mod polling {
        use std::time::Duration;

        /// Interval between statistics/document refreshes (milliseconds)
        pub const POLL_INTERVAL_MS: u64 = 5000;

        /// Lower bound accepted from the command line or config file
        pub const MIN_POLL_INTERVAL_MS: u64 = 250;

        pub const fn poll_interval() -> Duration {
            Duration::from_millis(POLL_INTERVAL_MS)
        }
    }

    // =============================================================================
    // DISPLAY TEXT
    // =============================================================================

    /// Fixed strings shown by the dashboard
    pub mod messages {
        pub const NO_DOCUMENTS: &str = "No documents processed yet.";
        pub const NO_LOCATIONS: &str = "No scannable drives found in docker-compose.yml";
        pub const LOCATIONS_ERROR: &str = "Error loading locations";
        pub const LOADING_LOCATIONS: &str = "Loading scan locations...";
        pub const SELECT_DIRECTORY: &str = "Please select a directory to scan.";
        pub const UNKNOWN_ERROR: &str = "Unknown error occurred.";
        pub const TRIGGER_LABEL: &str = "Scan Selected Directory";
        pub const TRIGGER_BUSY_LABEL: &str = "Scanning...";
    }
}
