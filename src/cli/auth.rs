use crate::{
    config::Config,
    spotify::{
        self,
        auth::{BrowserRedirect, PastedCode},
    },
};

/// Runs the authorization flow with the chosen code-acquisition strategy.
pub async fn auth(config: &Config, manual: bool) {
    if manual {
        spotify::auth::auth(config, &PastedCode).await
    } else {
        spotify::auth::auth(config, &BrowserRedirect).await
    }
}
