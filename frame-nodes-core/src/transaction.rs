//! Transaction Assembler
//!
//! Reshapes [`TransactionParameters`] into a [`TransactionRequest`]. Chain id,
//! recipient, calldata and ABI are copied verbatim; checking them is the
//! signer's job.

use frame_types::{TransactionCall, TransactionParameters, TransactionRequest};
use tracing::debug;

pub struct TransactionAssembler;

impl TransactionAssembler {
    pub fn assemble(params: TransactionParameters) -> TransactionRequest {
        let method = params.method_or_default().to_string();
        debug!(
            chain_id = %params.chain_id,
            method = %method,
            attribution = params.attribution,
            "Assembled transaction request"
        );

        TransactionRequest {
            chain_id: params.chain_id,
            method,
            attribution: params.attribution,
            params: TransactionCall {
                abi: params.abi,
                to: params.recipient,
                data: params.data,
                value: params.value,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_base_transfer() {
        let request = TransactionAssembler::assemble(
            TransactionParameters::new("eip155:8453", "0xabc")
                .with_value("1000")
                .with_attribution(true),
        );

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "chainId": "eip155:8453",
                "method": "eth_sendTransaction",
                "attribution": true,
                "params": { "to": "0xabc", "value": "1000" }
            })
        );
    }

    #[test]
    fn test_inputs_pass_through_unvalidated() {
        let abi = json!([{ "type": "function", "name": "mint", "inputs": [] }]);
        let request = TransactionAssembler::assemble(
            TransactionParameters::new("not-a-caip-id", "definitely not an address")
                .with_method("custom_method")
                .with_data("0xzz")
                .with_abi(abi.clone()),
        );

        assert_eq!(request.chain_id, "not-a-caip-id");
        assert_eq!(request.method, "custom_method");
        assert_eq!(request.params.to, "definitely not an address");
        assert_eq!(request.params.data.as_deref(), Some("0xzz"));
        assert_eq!(request.params.abi, Some(abi));
        assert_eq!(request.params.value, None);
        assert!(!request.attribution);
    }
}
