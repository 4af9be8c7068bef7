//! Mapping between the `shared` DTO contract and domain types.
//!
//! Frontends speak the request/response DTOs; services speak commands and
//! domain models. This module is the only place the two vocabularies meet.

use shared::{
    CreateTransactionRequest, DeleteTransactionsRequest, DeleteTransactionsResponse,
    TransactionListRequest, TransactionListResponse, UpdateTransactionRequest,
};

use crate::domain::commands::transactions::{
    CreateTransactionCommand, DeleteTransactionsCommand, DeleteTransactionsResult,
    TransactionListQuery, TransactionListResult, UpdateTransactionCommand,
};
use crate::domain::models::transaction::{Transaction, TransactionType};

pub struct TransactionMapper;

impl TransactionMapper {
    /// Convert a domain transaction into the DTO handed to frontends and
    /// document builders.
    pub fn to_dto(transaction: Transaction) -> shared::Transaction {
        shared::Transaction {
            id: transaction.id,
            date: transaction.date,
            description: transaction.description,
            amount: transaction.amount,
            category: transaction.category,
            transaction_type: Self::type_to_dto(transaction.transaction_type),
            created_at: transaction.created_at,
        }
    }

    pub fn type_to_dto(transaction_type: TransactionType) -> shared::TransactionType {
        match transaction_type {
            TransactionType::Income => shared::TransactionType::Income,
            TransactionType::Expense => shared::TransactionType::Expense,
        }
    }

    pub fn type_to_domain(transaction_type: shared::TransactionType) -> TransactionType {
        match transaction_type {
            shared::TransactionType::Income => TransactionType::Income,
            shared::TransactionType::Expense => TransactionType::Expense,
        }
    }

    pub fn to_create_command(request: CreateTransactionRequest) -> CreateTransactionCommand {
        CreateTransactionCommand {
            description: request.description,
            amount: request.amount,
            category: request.category,
            transaction_type: Self::type_to_domain(request.transaction_type),
            date: request.date,
        }
    }

    pub fn to_update_command(
        transaction_id: String,
        request: UpdateTransactionRequest,
    ) -> UpdateTransactionCommand {
        UpdateTransactionCommand {
            transaction_id,
            description: request.description,
            amount: request.amount,
            category: request.category,
            transaction_type: request.transaction_type.map(Self::type_to_domain),
            date: request.date,
        }
    }

    pub fn to_list_query(request: TransactionListRequest) -> TransactionListQuery {
        TransactionListQuery {
            start_date: request.start_date,
            end_date: request.end_date,
            limit: request.limit,
        }
    }

    pub fn to_list_response(result: TransactionListResult) -> TransactionListResponse {
        TransactionListResponse {
            transactions: result.transactions.into_iter().map(Self::to_dto).collect(),
        }
    }

    pub fn to_delete_command(request: DeleteTransactionsRequest) -> DeleteTransactionsCommand {
        DeleteTransactionsCommand {
            transaction_ids: request.transaction_ids,
        }
    }

    pub fn to_delete_response(result: DeleteTransactionsResult) -> DeleteTransactionsResponse {
        DeleteTransactionsResponse {
            deleted_count: result.deleted_count,
            success_message: result.success_message,
            not_found_ids: result.not_found_ids,
        }
    }
}
