use super::api::upload_invoices;
use super::file_reader::{file_key, files_from_list, read_file};
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::list_utils::{format_price, format_weight};
use contracts::domain::a002_invoice::PreviewRow;
use contracts::shared::i18n::MessageKey;
use contracts::usecases::u501_upload_invoices::{
    FileKey, FileSource, ParsedFile, UploadPhase, UploadSession, JSON_MIME,
};
use leptos::html;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, File};

/// Dialog for previewing and submitting invoice JSON files
///
/// Files can be picked or dropped, one or many at a time. Every file is parsed
/// into a preview right away; confirming sends the records of all files as a
/// single batch. Closing the dialog discards everything.
#[component]
pub fn UploadInvoicesDialog(
    open: RwSignal<bool>,
    /// Called after a successful upload, once the dialog has closed
    on_uploaded: Callback<()>,
) -> impl IntoView {
    let i18n = use_i18n();

    let session = RwSignal::new(UploadSession::new());
    let (is_dragging, set_is_dragging) = signal(false);
    let file_input = NodeRef::<html::Input>::new();
    // bumped on every open/close so late async results from an old session are dropped
    let epoch = StoredValue::new(0_u64);

    Effect::new(move |_| {
        let is_open = open.get();
        epoch.update_value(|e| *e += 1);
        if is_open {
            session.set(UploadSession::new());
        } else {
            session.update(|s| s.close());
            set_is_dragging.set(false);
        }
    });

    let is_current = move |started: u64| epoch.try_get_value() == Some(started);

    let handle_files = move |source: FileSource, files: Vec<File>| {
        if session.with_untracked(|s| s.is_busy()) {
            log::debug!("ignoring {} file(s) while busy", files.len());
            return;
        }
        let to_read: Vec<File> = session.with_untracked(|s| {
            files
                .into_iter()
                .filter(|f| s.accepts(source, &file_key(f), &f.type_()))
                .collect()
        });
        if to_read.is_empty() {
            log::debug!("no new JSON files to add");
            return;
        }

        if !session.try_update(|s| s.begin_parsing()).unwrap_or(false) {
            return;
        }
        let started = epoch.get_value();

        leptos::task::spawn_local(async move {
            let mut incoming = Vec::with_capacity(to_read.len());
            for file in &to_read {
                match read_file(file).await {
                    Ok(f) => incoming.push(f),
                    Err(e) => log::warn!("{}", e),
                }
            }
            if !is_current(started) {
                return;
            }

            session.update(|s| {
                let report = s.add_files(source, incoming);
                for e in &report.failed {
                    log::error!("failed to parse invoice file: {}", e);
                }
                log::debug!(
                    "added {} file(s), skipped {} duplicate(s), ignored {}, rejected {}",
                    report.added.len(),
                    report.duplicates.len(),
                    report.ignored.len(),
                    report.rejected.len()
                );
            });
        });
    };

    let on_input_change = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        let Some(input) = input else { return };

        let files = input.files().map(|l| files_from_list(&l)).unwrap_or_default();
        // lets the same file be picked again after removing it
        input.set_value("");
        handle_files(FileSource::Picker, files);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(false);
        let files = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .map(|l| files_from_list(&l))
            .unwrap_or_default();
        handle_files(FileSource::Drop, files);
    };

    let open_picker = move || {
        if session.with_untracked(|s| s.is_busy()) {
            return;
        }
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let confirm = move || {
        let Some(result) = session.try_update(|s| s.begin_upload()) else {
            return;
        };
        let records = match result {
            Ok(records) => records,
            Err(e) => {
                log::warn!("{}", e);
                return;
            }
        };
        let started = epoch.get_value();

        leptos::task::spawn_local(async move {
            let result = upload_invoices(&records).await;
            match &result {
                Ok(()) => log::info!("uploaded {} invoice record(s)", records.len()),
                Err(e) => log::error!("invoice upload failed: {}", e),
            }

            let done = if is_current(started) {
                session.try_update(|s| s.finish_upload(result)).unwrap_or(false)
            } else {
                result.is_ok()
            };
            if done {
                open.set(false);
                on_uploaded.run(());
            }
        });
    };

    let is_busy = Signal::derive(move || session.with(|s| s.is_busy()));
    let is_uploading = Signal::derive(move || session.with(|s| s.phase() == UploadPhase::Uploading));

    let status = move || {
        let (phase, error) = session.with(|s| (s.phase(), s.error().cloned()));
        let spinner = (phase == UploadPhase::Parsing).then(|| {
            view! {
                <div class="upload-dialog__status">
                    <Spinner />
                    <span class="text-muted">{i18n.t(MessageKey::Parsing)}</span>
                </div>
            }
        });
        let error_box = error.map(|e| {
            view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{i18n.t(e.message_key())}</span>
                </div>
            }
        });
        view! {
            {spinner}
            {error_box}
        }
    };

    let file_list = move || {
        let files = session.with(|s| s.files().to_vec());
        if files.is_empty() {
            return view! { <></> }.into_any();
        }

        let count = files.len();
        view! {
            <div class="upload-dialog__files">
                <div class="upload-dialog__files-header">
                    <span>{format!("{} ({})", i18n.t(MessageKey::UploadedFilesLabel), count)}</span>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        disabled=is_busy
                        on_click=move |_| open_picker()
                    >
                        {icon("file-json")}
                        {format!(" {}", i18n.t(MessageKey::AddMore))}
                    </Button>
                </div>
                {files
                    .into_iter()
                    .map(|file| view! { <ParsedFileItem file=file session=session is_busy=is_busy /> })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{move || i18n.t(MessageKey::UploadTitle)}</DialogTitle>
                    <DialogContent>
                        <p class="text-muted">{move || i18n.t(MessageKey::UploadHelperText)}</p>

                        <input
                            node_ref=file_input
                            type="file"
                            accept=format!("{},.json", JSON_MIME)
                            multiple=true
                            class="hidden"
                            on:change=on_input_change
                        />

                        <div
                            class=move || {
                                if is_dragging.get() {
                                    "upload-dialog__dropzone upload-dialog__dropzone--active"
                                } else {
                                    "upload-dialog__dropzone"
                                }
                            }
                            on:click=move |_| open_picker()
                            on:dragover=move |ev: DragEvent| {
                                ev.prevent_default();
                                set_is_dragging.set(true);
                            }
                            on:dragleave=move |ev: DragEvent| {
                                ev.prevent_default();
                                set_is_dragging.set(false);
                            }
                            on:drop=on_drop
                        >
                            {icon("upload")}
                            <div class="upload-dialog__dropzone-text">
                                {move || i18n.t(MessageKey::DropHereText)}
                            </div>
                            <div class="upload-dialog__dropzone-subtext">
                                {move || i18n.t(MessageKey::DropHereSubtextPrefix)}
                                " "
                                <span class="upload-dialog__link">
                                    {move || i18n.t(MessageKey::DropHereSubtextClick)}
                                </span>
                            </div>
                        </div>

                        {status}
                        {file_list}
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            disabled=is_uploading
                            on_click=move |_| open.set(false)
                        >
                            {move || i18n.t(MessageKey::Cancel)}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=is_busy
                            on_click=move |_| confirm()
                        >
                            {move || {
                                if is_uploading.get() {
                                    i18n.t(MessageKey::Uploading)
                                } else {
                                    i18n.t(MessageKey::Confirm)
                                }
                            }}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

/// One file of the session with its collapsible preview table
#[component]
fn ParsedFileItem(
    file: ParsedFile,
    session: RwSignal<UploadSession>,
    #[prop(into)] is_busy: Signal<bool>,
) -> impl IntoView {
    let i18n = use_i18n();

    let key: FileKey = file.key.clone();
    let toggle_key = key.clone();
    let remove_key = key;
    let expanded = file.expanded;
    let row_count = file.rows.len();
    let name = file.name().to_string();

    view! {
        <div class="upload-dialog__file">
            <div class="upload-dialog__file-row">
                <button
                    class="upload-dialog__file-toggle"
                    on:click=move |_| session.update(|s| s.toggle_expanded(&toggle_key))
                >
                    {if expanded { icon("chevron-down") } else { icon("chevron-right") }}
                    <span class="upload-dialog__file-name" title=name.clone()>{name.clone()}</span>
                </button>
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                    {format!("{} {}", row_count, i18n.t(MessageKey::RowsLabel))}
                </Badge>
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    disabled=is_busy
                    attr:title=i18n.t(MessageKey::RemoveFile)
                    on_click=move |_| {
                        session.update(|s| {
                            s.remove_file(&remove_key);
                        });
                    }
                >
                    {icon("trash")}
                </Button>
            </div>
            {expanded.then(|| view! { <PreviewTable rows=file.rows /> })}
        </div>
    }
}

#[component]
fn PreviewTable(rows: Vec<PreviewRow>) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="upload-dialog__preview">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>{i18n.t(MessageKey::ColumnTracking)}</TableHeaderCell>
                        <TableHeaderCell>{i18n.t(MessageKey::Company)}</TableHeaderCell>
                        <TableHeaderCell>{i18n.t(MessageKey::ColumnCarrier)}</TableHeaderCell>
                        <TableHeaderCell>{i18n.t(MessageKey::ColumnRoute)}</TableHeaderCell>
                        <TableHeaderCell>{i18n.t(MessageKey::ColumnPrice)}</TableHeaderCell>
                        <TableHeaderCell>{i18n.t(MessageKey::ColumnWeight)}</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {rows
                        .into_iter()
                        .map(|row| {
                            let route = row.route();
                            let incomplete = !row.is_complete;
                            view! {
                                <TableRow class:upload-dialog__row--incomplete=incomplete>
                                    <TableCell>
                                        <TableCellLayout>{row.tracking_number}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{row.company_name}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{row.provider}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{route}</TableCellLayout>
                                    </TableCell>
                                    <TableCell class="table__cell--right">
                                        <TableCellLayout>{format_price(row.invoiced_price)}</TableCellLayout>
                                    </TableCell>
                                    <TableCell class="table__cell--right">
                                        <TableCellLayout>{format_weight(row.invoiced_weight)}</TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        })
                        .collect_view()}
                </TableBody>
            </Table>
        </div>
    }
}
