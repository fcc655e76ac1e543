//! Chrome DevTools Protocol (CDP) client.
//!
//! A minimal JSON-RPC client over the browser WebSocket, enough to open a
//! page, navigate, wait for content and evaluate extraction scripts.
//!
//! ```rust,ignore
//! let client = CdpClient::connect("http://127.0.0.1:9222").await?;
//! let page = client.new_page().await?;
//! page.navigate("https://example.com", Duration::from_secs(30)).await?;
//! let title = page.evaluate("document.title").await?;
//! ```

mod client;
mod error;
mod protocol;
mod session;

pub use client::CdpClient;
pub use error::CdpError;
pub use protocol::*;
pub use session::PageSession;
