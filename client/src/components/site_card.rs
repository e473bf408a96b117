//! Card for a single job site with an outbound link and a copy-URL button.

use leptos::prelude::*;

use crate::net::types::JobSite;

/// A job-site card.
///
/// Copying shows a "Copied" label for [`COPIED_LABEL_MS`]; a second copy
/// restarts the window rather than being cut short by the first timer.
///
/// [`COPIED_LABEL_MS`]: crate::util::clipboard::COPIED_LABEL_MS
#[component]
pub fn SiteCard(site: JobSite) -> impl IntoView {
    let copied = RwSignal::new(false);
    let copy_seq = RwSignal::new(0_u64);
    let url = site.url.clone();

    let on_copy = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let url = url.clone();
            leptos::task::spawn_local(async move {
                match crate::util::clipboard::copy_text(&url).await {
                    Ok(()) => {
                        copy_seq.update(|n| *n += 1);
                        let seq = copy_seq.get_untracked();
                        copied.set(true);
                        gloo_timers::future::sleep(std::time::Duration::from_millis(
                            crate::util::clipboard::COPIED_LABEL_MS,
                        ))
                        .await;
                        if copy_seq.get_untracked() == seq {
                            copied.set(false);
                        }
                    }
                    Err(e) => log::warn!("copy site url failed: {e}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&url, copy_seq);
        }
    };

    view! {
        <article class="site-card">
            <h3 class="site-card__name">{site.site_name}</h3>
            <span class="site-card__country">{site.country}</span>
            <a class="site-card__link" href=site.url.clone() target="_blank" rel="noopener noreferrer">
                {site.url.clone()}
            </a>
            <button class="btn site-card__copy" type="button" on:click=on_copy>
                {move || if copied.get() { "Copied" } else { "Copy link" }}
            </button>
        </article>
    }
}
