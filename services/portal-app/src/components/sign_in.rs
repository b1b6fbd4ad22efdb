//! Host element for the identity provider's sign-in widget

use leptos::prelude::*;

use crate::settings::use_site_settings;

/// DOM id the provider script mounts its widget into
pub const MOUNT_ID: &str = "identity-sign-in";

/// Mount point plus loader script for the hosted sign-in widget.
///
/// The provider owns sessions and credentials; this only passes it the
/// publishable key and where to send the patient afterwards.
#[component]
pub fn SignInWidget() -> impl IntoView {
    let identity = use_site_settings().identity;

    view! {
        <div
            id=MOUNT_ID
            class="identity-widget"
            data-publishable-key=identity.publishable_key.clone()
            data-sign-in-path=identity.sign_in_path
            data-redirect-url=identity.after_sign_in_path
        ></div>
        <script
            src=identity.script_url
            defer=true
            crossorigin="anonymous"
            data-publishable-key=identity.publishable_key
            data-mount=MOUNT_ID
        ></script>
    }
}
