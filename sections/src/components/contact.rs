//! Contact section - email with copy button plus external channels.

use leptos::prelude::*;

use crate::types::ContactInfo;

/// Contact block: note, primary email (copy-to-clipboard), channel links.
#[component]
pub fn ContactSection(contact: ContactInfo) -> impl IntoView {
    let email = contact.email.clone();

    view! {
        <div class="contact" id="contact">
            <p class="section-eyebrow">"Contact"</p>
            <h2 class="section-title">"Say hello"</h2>
            <p class="contact-note">{contact.note}</p>
            <div class="contact-email">
                <code>{contact.email.clone()}</code>
                <button class="copy-btn" data-copy=email>"Copy"</button>
            </div>
            <ul class="contact-channels">
                {contact
                    .channels
                    .into_iter()
                    .map(|channel| {
                        view! {
                            <li>
                                <a href=channel.url>
                                    {channel.label} " " <span>{channel.handle}</span>
                                </a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
