//! About page.

use askama::Template;
use askama_web::WebTemplate;
use tracing::instrument;

use atelier_core::company::{self, Milestone, TeamMember, Value};

use crate::filters;
use crate::middleware::CspNonce;
use crate::shell::PageShell;

#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub shell: PageShell,
    pub team: &'static [TeamMember],
    pub milestones: &'static [Milestone],
    pub values: &'static [Value],
}

/// Display the About page.
#[instrument(skip(nonce))]
pub async fn about(nonce: CspNonce) -> AboutTemplate {
    AboutTemplate {
        shell: PageShell::new("About Us", &nonce)
            .describe("The people, milestones and values behind Atelier."),
        team: company::TEAM,
        milestones: company::MILESTONES,
        values: company::VALUES,
    }
}
