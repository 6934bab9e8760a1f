// SPDX-License-Identifier: MPL-2.0
use login_localizer::error::Result;
use login_localizer::i18n::TranslationCatalog;
use login_localizer::localizer::Localizer;
use login_localizer::page::{forms, Slot};
use login_localizer::storage::FileStore;
use pico_args;

fn main() -> Result<()> {
    let mut args = pico_args::Arguments::from_env();
    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap();

    let catalog = TranslationCatalog::load()?;
    let mut localizer = Localizer::new(catalog, FileStore::new());
    let mut page = forms::login_form();

    let code = match lang.as_deref() {
        Some(requested) => {
            let code = requested.parse()?;
            localizer.switch_language(&mut page, code);
            code
        }
        None => localizer.initialize(&mut page),
    };

    println!("Login page ({}):", code);
    for element in page.elements() {
        if element.key().is_none() {
            continue;
        }
        let slot = match element.slot() {
            Slot::Placeholder => "placeholder",
            Slot::Value => "value",
            Slot::Text => "text",
        };
        println!("  {:12} {}", slot, element.slot_content());
    }

    // Countdown strings ship with a template token; substitution happens
    // at render time, not in the catalog.
    if let Some(template) = localizer.catalog().lookup(code, "send-again-countdown") {
        println!("  {:12} {}", "countdown", template.replace("{countdown}", "30"));
    }

    Ok(())
}
