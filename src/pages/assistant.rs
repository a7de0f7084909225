//! AI learning-assistant page: session setup, then a guided chat.

use leptos::prelude::*;

use crate::net::gateway::ApiGateway;
use crate::state::assistant::{Assistant, ChatRole};
use crate::state::catalog::{SUBJECTS, topics_for};

/// Learning assistant — a setup form that starts a learning session, then
/// a chat transcript bound to it.
#[component]
pub fn AssistantPage() -> impl IntoView {
    let gateway = expect_context::<ApiGateway>();
    let assistant = RwSignal::new(Assistant::new());

    let subject = RwSignal::new(String::new());
    let topic = RwSignal::new(String::new());
    let input = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let starting = RwSignal::new(false);
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    let past_sessions = LocalResource::new({
        let gateway = gateway.clone();
        move || {
            let gateway = gateway.clone();
            async move { gateway.sessions().await.unwrap_or_default() }
        }
    });

    // Keep the newest message in view.
    Effect::new(move || {
        let _ = assistant.get().messages.len();
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let on_start = {
        let gateway = gateway.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if starting.get() {
                return;
            }
            let subject_value = subject.get().trim().to_owned();
            let topic_value = topic.get().trim().to_owned();
            if subject_value.is_empty() || topic_value.is_empty() {
                error.set("Select both a subject and a topic.".to_owned());
                return;
            }
            starting.set(true);
            error.set(String::new());

            #[cfg(feature = "hydrate")]
            {
                let gateway = gateway.clone();
                leptos::task::spawn_local(async move {
                    let request = crate::net::types::StartSessionRequest {
                        subject: subject_value.clone(),
                        topic: topic_value.clone(),
                        learning_objectives: Vec::new(),
                    };
                    match gateway.start_session(&request).await {
                        Ok(started) => assistant.update(|a| {
                            a.session_started(started.session_id, subject_value, topic_value);
                        }),
                        Err(e) => error.set(e.to_string()),
                    }
                    starting.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (subject_value, topic_value, &gateway);
            }
        }
    };

    let do_send = {
        let gateway = gateway.clone();
        move || {
            let text = input.get().trim().to_owned();
            if text.is_empty() || assistant.get_untracked().pending {
                return;
            }
            input.set(String::new());
            assistant.update(|a| a.message_sent(text.clone()));

            #[cfg(feature = "hydrate")]
            {
                let gateway = gateway.clone();
                leptos::task::spawn_local(async move {
                    let state = assistant.get_untracked();
                    let request = crate::net::types::ChatRequest {
                        message: text,
                        session_id: state.session_id,
                        subject: state.subject,
                        topic: state.topic,
                    };
                    match gateway.chat(&request).await {
                        Ok(reply) => assistant.update(|a| a.reply_received(reply.response)),
                        Err(_) => assistant.update(Assistant::reply_failed),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (text, &gateway);
            }
        }
    };

    let on_send_click = {
        let do_send = do_send.clone();
        move |_| do_send()
    };
    let on_keydown = {
        let do_send = do_send.clone();
        move |ev: leptos::ev::KeyboardEvent| {
            if ev.key() == "Enter" && !ev.shift_key() {
                ev.prevent_default();
                do_send();
            }
        }
    };

    let on_end = {
        let gateway = gateway.clone();
        move |_| {
            let mut ended = None;
            assistant.update(|a| ended = a.session_ended());

            #[cfg(feature = "hydrate")]
            {
                if let Some(session_id) = ended {
                    let gateway = gateway.clone();
                    leptos::task::spawn_local(async move {
                        if let Err(e) = gateway.end_session(&session_id).await {
                            leptos::logging::warn!("end session failed: {e}");
                        }
                    });
                }
                past_sessions.refetch();
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (ended, &gateway);
            }
        }
    };

    let topic_options = move || {
        let curated = topics_for(&subject.get());
        curated.iter().map(|t| (*t).to_owned()).collect::<Vec<_>>()
    };

    view! {
        <div class="assistant-page">
            <Show
                when=move || !assistant.get().show_setup
                fallback=move || {
                    view! {
                        <div class="assistant-setup">
                            <h1>"🤖 AI Learning Assistant"</h1>
                            <p class="assistant-setup__subtitle">
                                "Pick a subject and topic to start a guided learning session."
                            </p>

                            <Show when=move || !error.get().is_empty()>
                                <div class="alert alert--error">
                                    <span>{move || error.get()}</span>
                                    <button class="alert__dismiss" on:click=move |_| error.set(String::new())>
                                        "✕"
                                    </button>
                                </div>
                            </Show>

                            <form class="assistant-setup__form" on:submit=on_start.clone()>
                                <label class="assistant-setup__label">
                                    "Subject"
                                    <select
                                        class="assistant-setup__input"
                                        on:change=move |ev| {
                                            subject.set(event_target_value(&ev));
                                            topic.set(String::new());
                                        }
                                        prop:value=move || subject.get()
                                    >
                                        <option value="">"Select a subject"</option>
                                        {SUBJECTS
                                            .into_iter()
                                            .map(|s| view! { <option value=s>{s}</option> })
                                            .collect::<Vec<_>>()}
                                    </select>
                                </label>
                                <label class="assistant-setup__label">
                                    "Topic"
                                    <Show
                                        when=move || !topic_options().is_empty()
                                        fallback=move || {
                                            view! {
                                                <input
                                                    class="assistant-setup__input"
                                                    type="text"
                                                    placeholder="Enter a topic"
                                                    prop:value=move || topic.get()
                                                    on:input=move |ev| topic.set(event_target_value(&ev))
                                                />
                                            }
                                        }
                                    >
                                        <select
                                            class="assistant-setup__input"
                                            on:change=move |ev| topic.set(event_target_value(&ev))
                                            prop:value=move || topic.get()
                                        >
                                            <option value="">"Select a topic"</option>
                                            {move || {
                                                topic_options()
                                                    .into_iter()
                                                    .map(|t| view! { <option value=t.clone()>{t.clone()}</option> })
                                                    .collect::<Vec<_>>()
                                            }}
                                        </select>
                                    </Show>
                                </label>
                                <button class="btn btn--primary" type="submit" disabled=move || starting.get()>
                                    {move || if starting.get() { "Starting..." } else { "Start Learning Session" }}
                                </button>
                            </form>

                            <section class="assistant-setup__history">
                                <h2>"Recent Sessions"</h2>
                                <Suspense fallback=move || view! { <p>"Loading sessions..."</p> }>
                                    {move || {
                                        past_sessions
                                            .get()
                                            .map(|sessions| {
                                                if sessions.is_empty() {
                                                    view! { <p class="tile__hint">"No sessions yet."</p> }.into_any()
                                                } else {
                                                    sessions
                                                        .iter()
                                                        .take(5)
                                                        .map(|session| {
                                                            view! {
                                                                <p class="assistant-setup__session">
                                                                    {format!("{} - {}", session.subject, session.topic)}
                                                                </p>
                                                            }
                                                        })
                                                        .collect::<Vec<_>>()
                                                        .into_any()
                                                }
                                            })
                                    }}
                                </Suspense>
                            </section>
                        </div>
                    }
                }
            >
                <div class="assistant-chat">
                    <header class="assistant-chat__header">
                        <h1>
                            {move || {
                                let state = assistant.get();
                                format!("🤖 {} - {}", state.subject, state.topic)
                            }}
                        </h1>
                        <button class="btn" on:click=on_end.clone()>
                            "End Session"
                        </button>
                    </header>

                    <div class="assistant-chat__messages" node_ref=messages_ref>
                        {move || {
                            assistant
                                .get()
                                .messages
                                .iter()
                                .map(|entry| {
                                    let role_class = match entry.role {
                                        ChatRole::User => "assistant-chat__message--user",
                                        ChatRole::Assistant => "assistant-chat__message--assistant",
                                    };
                                    view! {
                                        <div class=format!("assistant-chat__message {role_class}")>
                                            {entry.content.clone()}
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                        <Show when=move || assistant.get().pending>
                            <div class="assistant-chat__message assistant-chat__message--assistant assistant-chat__message--pending">
                                "Thinking..."
                            </div>
                        </Show>
                    </div>

                    <div class="assistant-chat__input-row">
                        <input
                            class="assistant-chat__input"
                            type="text"
                            placeholder="Ask anything about this topic..."
                            prop:value=move || input.get()
                            on:input=move |ev| input.set(event_target_value(&ev))
                            on:keydown=on_keydown.clone()
                        />
                        <button
                            class="btn btn--primary"
                            on:click=on_send_click.clone()
                            disabled=move || input.get().trim().is_empty() || assistant.get().pending
                        >
                            "Send"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
