use proc_macro::TokenStream as TokenStream1;
use proc_macro2::TokenStream as TokenStream2;
use quote::ToTokens;
use syn;

/// This macro is added before a method of a stateful game engine in its impl
/// block. Use this macro to first check that the engine is exactly in the
/// phase named in the attribute.
///
/// For example, `#[allowed_phase(PlayerActing)]` will make a method first
/// check whether `self.phase` is `Phase::PlayerActing`. If not, the method
/// returns `Error::InvalidPhase` without touching the engine state.
///
/// The surrounding module must define a `Phase` enum, a `phase` field on the
/// receiver, and an `Error` enum with an
/// `InvalidPhase { expected: Phase, actual: Phase }` variant.
#[proc_macro_attribute]
pub fn allowed_phase(attr: TokenStream1, item: TokenStream1) -> TokenStream1 {
    let mut ast: syn::ImplItemFn = syn::parse(item).unwrap();
    let phase = attr.to_string();
    let code = format!(
        r#"
    if self.phase != Phase::{} {{
        return Err(Error::InvalidPhase {{
            expected: Phase::{},
            actual: self.phase,
        }});
    }}
"#,
        phase, phase
    );
    let early_return: TokenStream2 = code.parse().unwrap();
    let early_return: syn::Stmt = syn::parse2(early_return).unwrap();
    ast.block.stmts.insert(0, early_return);
    ast.into_token_stream().into()
}
