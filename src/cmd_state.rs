//! The `state` command.

use feedrelay_config::Config;
use feedrelay_core::{FileStateStore, ensure_data_dir};
use feedrelay_daemon::{EXIT_FAILURE, EXIT_SUCCESS};
use feedrelay_protocols::StateStore;

use crate::cli::StateAction;

pub(crate) async fn handle(action: StateAction, config: &Config) -> u8 {
    let store = FileStateStore::new(&config.monitor.data_dir);

    let result: anyhow::Result<()> = match action {
        StateAction::Show => {
            match store.load_last_id().await {
                Some(id) => println!("{}", id),
                None => println!("No saved state ({})", store.path().display()),
            }
            Ok(())
        }
        StateAction::Reset => store.clear().await.map(|()| {
            println!("State cleared");
        }).map_err(anyhow::Error::from),
        StateAction::Set { id } => set(&store, config, &id).await,
    };

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_FAILURE
        }
    }
}

async fn set(store: &FileStateStore, config: &Config, id: &str) -> anyhow::Result<()> {
    let id = id.trim();
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        anyhow::bail!("Post id must be decimal digits, got {:?}", id);
    }
    ensure_data_dir(&config.monitor.data_dir).await?;
    store.save_last_id(id).await?;
    println!("Last processed id set to {}", id);
    Ok(())
}
