use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, ItemFn};

/// Registers an async slash command handler under its function name.
///
/// The annotated function must have the signature
/// `async fn name(interaction: VerifiedInteraction, app_state: AppState) -> anyhow::Result<MessagePayload>`.
/// Registration happens at load time, so the command router can look the
/// handler up by the exact command name Discord sends.
#[proc_macro_attribute]
pub fn command_handler(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input_fn = parse_macro_input!(item as ItemFn);
    let fn_name = &input_fn.sig.ident;
    let fn_name_str = fn_name.to_string();

    let expanded = quote! {
        #input_fn

        paste::paste! {
            #[ctor::ctor]
            fn [<__register_command_ #fn_name>]() {
                crate::controller::discord::command::register_command(
                    #fn_name_str,
                    |interaction, app_state| Box::pin(#fn_name(interaction, app_state))
                );
            }
        }
    };

    TokenStream::from(expanded)
}
