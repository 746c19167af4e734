//! PairCreated event decoder
//!
//! Extracts `(token0, token1, pair)` from one raw factory log. The caller
//! filters by contract address and topic0 before dispatch, so decoding is
//! pure and only fails on malformed shapes (escalated to cycle scope).

use alloy_primitives::{keccak256, Address, B256};
use lazy_static::lazy_static;

use crate::error::DecodeError;
use crate::types::{PairCreatedEvent, RawLog};

lazy_static! {
    /// topic0 of the factory creation event
    pub static ref PAIR_CREATED_TOPIC: B256 =
        keccak256(b"PairCreated(address,address,address)");
}

/// Decode one `PairCreated` log.
///
/// `token0`/`token1` come from the last 20 bytes of the indexed topic
/// words; `pair` from the last 20 bytes of the non-indexed payload.
pub fn decode_pair_created(log: &RawLog) -> Result<PairCreatedEvent, DecodeError> {
    if log.topics.len() < 3 {
        return Err(DecodeError::MissingTopics(log.topics.len()));
    }
    if log.data.len() < 32 {
        return Err(DecodeError::ShortData(log.data.len()));
    }

    Ok(PairCreatedEvent {
        token0: address_from_word(&log.topics[1]),
        token1: address_from_word(&log.topics[2]),
        pair: Address::from_slice(&log.data[log.data.len() - 20..]),
        block_number: log.block_number,
    })
}

/// Last 20 bytes of a 32-byte topic word.
fn address_from_word(word: &B256) -> Address {
    Address::from_slice(&word[12..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, Bytes, U256};

    fn topic_for(addr: Address) -> B256 {
        B256::from(U256::from_be_slice(addr.as_slice()))
    }

    fn pair_log(token0: Address, token1: Address, pair: Address, block: u64) -> RawLog {
        RawLog {
            topics: vec![*PAIR_CREATED_TOPIC, topic_for(token0), topic_for(token1)],
            data: Bytes::from(topic_for(pair).to_vec()),
            block_number: block,
        }
    }

    #[test]
    fn topic_matches_known_signature() {
        assert_eq!(
            *PAIR_CREATED_TOPIC,
            keccak256(b"PairCreated(address,address,address)")
        );
    }

    #[test]
    fn decodes_well_formed_log() {
        let token0 = address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");
        let token1 = address!("1000000000000000000000000000000000000001");
        let pair = address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
        let event = decode_pair_created(&pair_log(token0, token1, pair, 103)).unwrap();
        assert_eq!(event.token0, token0);
        assert_eq!(event.token1, token1);
        assert_eq!(event.pair, pair);
        assert_eq!(event.block_number, 103);
    }

    #[test]
    fn decoding_is_deterministic() {
        let log = pair_log(
            address!("1000000000000000000000000000000000000001"),
            address!("2000000000000000000000000000000000000002"),
            address!("3000000000000000000000000000000000000003"),
            7,
        );
        assert_eq!(
            decode_pair_created(&log).unwrap(),
            decode_pair_created(&log).unwrap()
        );
    }

    #[test]
    fn distinct_logs_decode_distinct() {
        let a = pair_log(
            address!("1000000000000000000000000000000000000001"),
            address!("2000000000000000000000000000000000000002"),
            address!("3000000000000000000000000000000000000003"),
            7,
        );
        let b = pair_log(
            address!("1000000000000000000000000000000000000001"),
            address!("2000000000000000000000000000000000000002"),
            address!("4000000000000000000000000000000000000004"),
            7,
        );
        assert_ne!(decode_pair_created(&a).unwrap(), decode_pair_created(&b).unwrap());
    }

    #[test]
    fn rejects_missing_topics() {
        let log = RawLog {
            topics: vec![*PAIR_CREATED_TOPIC],
            data: Bytes::from(vec![0u8; 32]),
            block_number: 1,
        };
        assert!(matches!(
            decode_pair_created(&log),
            Err(DecodeError::MissingTopics(1))
        ));
    }

    #[test]
    fn rejects_short_payload() {
        let log = RawLog {
            topics: vec![*PAIR_CREATED_TOPIC, B256::ZERO, B256::ZERO],
            data: Bytes::from(vec![0u8; 8]),
            block_number: 1,
        };
        assert!(matches!(
            decode_pair_created(&log),
            Err(DecodeError::ShortData(8))
        ));
    }
}
