//! # Gatehouse - Session Authentication Service Library
//!
//! This is a facade crate that re-exports all public APIs from the gatehouse components.
//! Use this crate to get access to all authentication functionality in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! gatehouse = { path = "../gatehouse" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Username`, `Password`, `User`, `SessionRecord`, etc.
//! - **Port traits**: `UserStore`, `SessionStore`, `CredentialHasher`
//! - **Guards and use cases**: `guards`, `RegisterUseCase`, `LoginUseCase`, `LogoutUseCase`
//! - **Adapters**: `PostgresUserStore`, `RedisSessionStore`, `Argon2CredentialHasher`, etc.
//! - **Service**: `AuthService` - The main entry point for the auth service

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use gatehouse_core::*;
}

// Re-export most commonly used core types at the root level
pub use gatehouse_core::{
    Password, PasswordError, PasswordHash, SessionId, SessionRecord, SessionState, User, UserId,
    Username,
};

// ============================================================================
// Port Traits
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use gatehouse_core::{
        CredentialHashError, CredentialHasher, SessionStore, SessionStoreError, UserStore,
        UserStoreError,
    };
}

// Re-export port traits at root level
pub use gatehouse_core::{
    CredentialHashError, CredentialHasher, SessionStore, SessionStoreError, UserStore,
    UserStoreError,
};

// ============================================================================
// Guards and Use Cases (Application Layer)
// ============================================================================

/// Application guards and use cases
pub mod use_cases {
    pub use gatehouse_application::*;
}

// Re-export guards and use cases at root level
pub use gatehouse_application::{
    GuardError, LoginOutcome, LoginUseCase, LogoutOutcome, LogoutUseCase, RegisterUseCase, guards,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers
    pub mod http {
        pub use gatehouse_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use gatehouse_adapters::persistence::*;
    }

    /// Password hashing implementations
    pub mod hashing {
        pub use gatehouse_adapters::hashing::*;
    }

    /// Configuration
    pub mod config {
        pub use gatehouse_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use gatehouse_adapters::{
    hashing::Argon2CredentialHasher,
    persistence::{HashMapSessionStore, HashMapUserStore, PostgresUserStore, RedisSessionStore},
};

// ============================================================================
// Auth Service (Main Entry Point)
// ============================================================================

/// Main auth service
pub use gatehouse_service::{
    AuthService, configure_postgresql, configure_redis, get_redis_client,
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use axum;
