use leptos::prelude::*;
use thaw::*;

/// A close that did not come from the OK button: Cancel, the mask or Esc
fn dismissed(was_open: Option<bool>, open: bool, confirmed: bool) -> bool {
    was_open == Some(true) && !open && !confirmed
}

/// Yes/no confirmation in a modal dialog. `on_cancel` runs for every close
/// other than OK.
#[component]
pub fn ConfirmDialog(
    open: RwSignal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] message: Signal<String>,
    on_confirm: Callback<()>,
    #[prop(optional)] on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let confirmed = StoredValue::new(false);

    Effect::new(move |was_open: Option<bool>| {
        let now = open.get();
        if now {
            confirmed.set_value(false);
        } else if dismissed(was_open, now, confirmed.get_value()) {
            if let Some(cb) = on_cancel {
                cb.run(());
            }
        }
        now
    });

    let handle_cancel = move |_| open.set(false);

    let handle_confirm = move |_| {
        confirmed.set_value(true);
        on_confirm.run(());
        open.set(false);
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{move || title.get()}</DialogTitle>
                    <DialogContent>
                        <p class="confirm-dialog__message">{move || message.get()}</p>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=handle_cancel>
                            "Cancel"
                        </Button>
                        <Button appearance=ButtonAppearance::Primary on_click=handle_confirm>
                            "OK"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
