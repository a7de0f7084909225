//! Translation tools page: general text, educational content, and quiz
//! translation tabs.

use leptos::prelude::*;

use crate::net::gateway::ApiGateway;
use crate::state::translation::{EducationalForm, QuizForm, TextForm, TranslationTab};

/// Language pairs offered when the backend's language list is unavailable.
fn builtin_languages() -> Vec<(String, String)> {
    [("en", "English"), ("es", "Spanish"), ("fr", "French"), ("de", "German")]
        .into_iter()
        .map(|(code, name)| (code.to_owned(), name.to_owned()))
        .collect()
}

#[component]
pub fn TranslationPage() -> impl IntoView {
    let gateway = expect_context::<ApiGateway>();

    let active_tab = RwSignal::new(TranslationTab::General);
    let text_form = RwSignal::new(TextForm::default());
    let edu_form = RwSignal::new(EducationalForm::default());
    let quiz_form = RwSignal::new(QuizForm::default());

    let languages = LocalResource::new({
        let gateway = gateway.clone();
        move || {
            let gateway = gateway.clone();
            async move { gateway.languages().await.ok() }
        }
    });
    let language_options = Signal::derive(move || {
        languages
            .get()
            .flatten()
            .filter(|response| !response.languages.is_empty())
            .map(|response| response.languages.into_iter().collect::<Vec<_>>())
            .unwrap_or_else(builtin_languages)
    });

    let tab_button = move |tab: TranslationTab, label: &'static str| {
        view! {
            <button
                class="translation-page__tab"
                class:translation-page__tab--active=move || active_tab.get() == tab
                on:click=move |_| active_tab.set(tab)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="translation-page">
            <header>
                <h1>"🌐 Translation Tools"</h1>
                <p class="translation-page__subtitle">
                    "Translate educational content for better accessibility and understanding"
                </p>
            </header>

            <div class="translation-page__tabs">
                {tab_button(TranslationTab::General, "General Translation")}
                {tab_button(TranslationTab::Educational, "Educational Content")}
                {tab_button(TranslationTab::Quiz, "Quiz Translation")}
            </div>

            <Show when=move || active_tab.get() == TranslationTab::General>
                <GeneralTab form=text_form options=language_options/>
            </Show>
            <Show when=move || active_tab.get() == TranslationTab::Educational>
                <EducationalTab form=edu_form options=language_options/>
            </Show>
            <Show when=move || active_tab.get() == TranslationTab::Quiz>
                <QuizTab form=quiz_form options=language_options/>
            </Show>
        </div>
    }
}

/// Shared select bound to a language-code slot of a form signal.
#[component]
fn LanguageSelect(
    options: Signal<Vec<(String, String)>>,
    value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            class="translation-page__select"
            on:change=move |ev| on_change.run(event_target_value(&ev))
            prop:value=move || value.get()
        >
            {move || {
                options
                    .get()
                    .into_iter()
                    .map(|(code, name)| view! { <option value=code.clone()>{name}</option> })
                    .collect::<Vec<_>>()
            }}
        </select>
    }
}

#[component]
fn GeneralTab(form: RwSignal<TextForm>, options: Signal<Vec<(String, String)>>) -> impl IntoView {
    let gateway = expect_context::<ApiGateway>();

    let on_translate = move |_| {
        let snapshot = form.get_untracked();
        if snapshot.text.trim().is_empty() || snapshot.busy {
            return;
        }
        form.update(|f| f.busy = true);

        #[cfg(feature = "hydrate")]
        {
            let gateway = gateway.clone();
            leptos::task::spawn_local(async move {
                let request = crate::net::types::TranslateRequest {
                    text: snapshot.text,
                    from_lang: snapshot.from_lang,
                    to_lang: snapshot.to_lang,
                };
                match gateway.translate(&request).await {
                    Ok(response) => {
                        form.update(|f| f.translated_received(response.translated_text));
                    }
                    Err(e) => {
                        leptos::logging::warn!("translation failed: {e}");
                        form.update(|f| f.busy = false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (snapshot, &gateway);
        }
    };

    view! {
        <div class="translation-page__panel">
            <h2>"General Text Translation"</h2>
            <p class="tile__hint">
                "Translate any text between supported languages for educational purposes."
            </p>

            <div class="translation-page__langs">
                <LanguageSelect
                    options=options
                    value=Signal::derive(move || form.get().from_lang)
                    on_change=Callback::new(move |code| form.update(|f| f.from_lang = code))
                />
                <button
                    class="btn translation-page__swap"
                    title="Swap languages"
                    on:click=move |_| form.update(TextForm::swap_languages)
                >
                    "⇄"
                </button>
                <LanguageSelect
                    options=options
                    value=Signal::derive(move || form.get().to_lang)
                    on_change=Callback::new(move |code| form.update(|f| f.to_lang = code))
                />
            </div>

            <div class="translation-page__io">
                <textarea
                    class="translation-page__text"
                    placeholder="Enter text to translate..."
                    prop:value=move || form.get().text
                    on:input=move |ev| form.update(|f| f.text = event_target_value(&ev))
                ></textarea>
                <textarea
                    class="translation-page__text translation-page__text--output"
                    readonly=true
                    prop:value=move || form.get().translated
                ></textarea>
            </div>

            <button
                class="btn btn--primary"
                on:click=on_translate
                disabled=move || {
                    let state = form.get();
                    state.busy || state.text.trim().is_empty()
                }
            >
                {move || if form.get().busy { "Translating..." } else { "Translate" }}
            </button>
        </div>
    }
}

#[component]
fn EducationalTab(
    form: RwSignal<EducationalForm>,
    options: Signal<Vec<(String, String)>>,
) -> impl IntoView {
    let gateway = expect_context::<ApiGateway>();

    let on_translate = move |_| {
        let snapshot = form.get_untracked();
        if snapshot.content.trim().is_empty() || snapshot.busy {
            return;
        }
        form.update(|f| f.busy = true);

        #[cfg(feature = "hydrate")]
        {
            let gateway = gateway.clone();
            leptos::task::spawn_local(async move {
                let request = crate::net::types::EducationalContentRequest {
                    content: snapshot.content,
                    content_type: snapshot.content_type,
                    from_lang: snapshot.from_lang,
                    to_lang: snapshot.to_lang,
                };
                match gateway.translate_educational_content(&request).await {
                    Ok(response) => form.update(|f| {
                        f.translated = response.translated_content;
                        f.busy = false;
                    }),
                    Err(e) => {
                        leptos::logging::warn!("educational translation failed: {e}");
                        form.update(|f| f.busy = false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (snapshot, &gateway);
        }
    };

    view! {
        <div class="translation-page__panel">
            <h2>"Educational Content Translation"</h2>
            <p class="tile__hint">
                "Preserves pedagogical structure while translating lessons and materials."
            </p>

            <div class="translation-page__langs">
                <label class="translation-page__label">
                    "Content Type"
                    <select
                        class="translation-page__select"
                        on:change=move |ev| form.update(|f| f.content_type = event_target_value(&ev))
                        prop:value=move || form.get().content_type
                    >
                        <option value="text">"Plain Text"</option>
                        <option value="lesson">"Lesson"</option>
                        <option value="exercise">"Exercise"</option>
                    </select>
                </label>
                <LanguageSelect
                    options=options
                    value=Signal::derive(move || form.get().from_lang)
                    on_change=Callback::new(move |code| form.update(|f| f.from_lang = code))
                />
                <LanguageSelect
                    options=options
                    value=Signal::derive(move || form.get().to_lang)
                    on_change=Callback::new(move |code| form.update(|f| f.to_lang = code))
                />
            </div>

            <div class="translation-page__io">
                <textarea
                    class="translation-page__text"
                    placeholder="Paste educational content..."
                    prop:value=move || form.get().content
                    on:input=move |ev| form.update(|f| f.content = event_target_value(&ev))
                ></textarea>
                <textarea
                    class="translation-page__text translation-page__text--output"
                    readonly=true
                    prop:value=move || form.get().translated
                ></textarea>
            </div>

            <button
                class="btn btn--primary"
                on:click=on_translate
                disabled=move || {
                    let state = form.get();
                    state.busy || state.content.trim().is_empty()
                }
            >
                {move || if form.get().busy { "Translating..." } else { "Translate Content" }}
            </button>
        </div>
    }
}

#[component]
fn QuizTab(form: RwSignal<QuizForm>, options: Signal<Vec<(String, String)>>) -> impl IntoView {
    let gateway = expect_context::<ApiGateway>();

    let on_translate = move |_| {
        let snapshot = form.get_untracked();
        if snapshot.questions.is_empty() || snapshot.busy {
            return;
        }
        form.update(|f| f.busy = true);

        #[cfg(feature = "hydrate")]
        {
            let gateway = gateway.clone();
            leptos::task::spawn_local(async move {
                let request = crate::net::types::QuizTranslateRequest {
                    questions: snapshot.questions,
                    from_lang: snapshot.from_lang,
                    to_lang: snapshot.to_lang,
                };
                match gateway.translate_quiz(&request).await {
                    Ok(response) => form.update(|f| {
                        f.translated = response.translated_questions;
                        f.busy = false;
                    }),
                    Err(e) => {
                        leptos::logging::warn!("quiz translation failed: {e}");
                        form.update(|f| f.busy = false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (snapshot, &gateway);
        }
    };

    view! {
        <div class="translation-page__panel">
            <h2>"Quiz Translation"</h2>
            <p class="tile__hint">"Author questions below, then translate them as a batch."</p>

            <div class="translation-page__langs">
                <LanguageSelect
                    options=options
                    value=Signal::derive(move || form.get().from_lang)
                    on_change=Callback::new(move |code| form.update(|f| f.from_lang = code))
                />
                <LanguageSelect
                    options=options
                    value=Signal::derive(move || form.get().to_lang)
                    on_change=Callback::new(move |code| form.update(|f| f.to_lang = code))
                />
                <button class="btn" on:click=move |_| form.update(QuizForm::add_question)>
                    "+ Add Question"
                </button>
            </div>

            <div class="translation-page__questions">
                {move || {
                    let count = form.get().questions.len();
                    (0..count)
                        .map(|index| {
                            view! {
                                <div class="translation-page__question">
                                    <div class="translation-page__question-head">
                                        <h3>{format!("Question {}", index + 1)}</h3>
                                        <button
                                            class="btn"
                                            on:click=move |_| form.update(|f| f.remove_question(index))
                                        >
                                            "Remove"
                                        </button>
                                    </div>
                                    <input
                                        class="translation-page__input"
                                        type="text"
                                        placeholder="Question text"
                                        prop:value=move || {
                                            form.get()
                                                .questions
                                                .get(index)
                                                .map(|q| q.question.clone())
                                                .unwrap_or_default()
                                        }
                                        on:input=move |ev| {
                                            form.update(|f| {
                                                f.set_question_text(index, event_target_value(&ev));
                                            });
                                        }
                                    />
                                    {(0..4)
                                        .map(|option| {
                                            view! {
                                                <input
                                                    class="translation-page__input translation-page__input--option"
                                                    type="text"
                                                    placeholder=format!("Option {}", option + 1)
                                                    prop:value=move || {
                                                        form.get()
                                                            .questions
                                                            .get(index)
                                                            .and_then(|q| q.options.get(option).cloned())
                                                            .unwrap_or_default()
                                                    }
                                                    on:input=move |ev| {
                                                        form.update(|f| {
                                                            f.set_option(index, option, event_target_value(&ev));
                                                        });
                                                    }
                                                />
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <button
                class="btn btn--primary"
                on:click=on_translate
                disabled=move || {
                    let state = form.get();
                    state.busy || state.questions.is_empty()
                }
            >
                {move || if form.get().busy { "Translating..." } else { "Translate Quiz" }}
            </button>

            <Show when=move || !form.get().translated.is_empty()>
                <section class="translation-page__translated">
                    <h3>"Translated Questions"</h3>
                    {move || {
                        form.get()
                            .translated
                            .iter()
                            .enumerate()
                            .map(|(index, question)| {
                                view! {
                                    <div class="translation-page__question">
                                        <p class="translation-page__prompt">
                                            {format!("{}. {}", index + 1, question.question)}
                                        </p>
                                        <ul>
                                            {question
                                                .options
                                                .iter()
                                                .map(|option| view! { <li>{option.clone()}</li> })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </section>
            </Show>
        </div>
    }
}
