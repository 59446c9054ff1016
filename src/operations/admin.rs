//! Admin back-office catalog: one list query per record kind plus its mutations.

use super::{list_query, operation, Input};
use crate::models::{
    Article, ArticleUpdate, Comment, CommentUpdate, Member, MemberUpdate, Property,
    PropertyUpdate, Rental, RentalUpdate,
};

/* RENTALS */

list_query! {
    GetAllRentalsByAdmin "getAllRentalsByAdmin" => Rental,
    r#"
query GetAllRentalsByAdmin($input: AllRentalsInquiry!) {
    getAllRentalsByAdmin(input: $input) {
        list {
            _id
            rentalStatus
            propertyId
            renterId
            ownerId
            startDate
            endDate
            totalPrice
            createdAt
            updatedAt
            propertyData {
                _id
                propertyTitle
                propertyImages
                propertyPrice
                propertyLocation
            }
            renterData {
                _id
                memberNick
                memberFullName
                memberImage
                memberPhone
            }
            ownerData {
                _id
                memberNick
                memberFullName
                memberImage
                memberPhone
            }
        }
        metaCounter {
            total
        }
    }
}
"#
}

operation! {
    UpdateRentalByAdmin: Mutation "updateRentalByAdmin", Input<RentalUpdate> => Rental,
    r#"
mutation UpdateRentalByAdmin($input: RentalUpdate!) {
    updateRentalByAdmin(input: $input) {
        _id
        rentalStatus
        propertyId
        renterId
        ownerId
        startDate
        endDate
        totalPrice
        createdAt
        updatedAt
    }
}
"#
}

operation! {
    RemoveRentalByAdmin: Mutation "removeRentalByAdmin", Input<String> => Rental,
    r#"
mutation RemoveRentalByAdmin($input: String!) {
    removeRentalByAdmin(rentalId: $input) {
        _id
        rentalStatus
        propertyId
        renterId
        ownerId
        startDate
        endDate
        totalPrice
        createdAt
        updatedAt
    }
}
"#
}

/* MEMBERS */

list_query! {
    GetAllMembersByAdmin "getAllMembersByAdmin" => Member,
    r#"
query GetAllMembersByAdmin($input: MembersInquiry!) {
    getAllMembersByAdmin(input: $input) {
        list {
            _id
            memberType
            memberStatus
            memberPhone
            memberNick
            memberFullName
            memberImage
            memberAddress
            memberProperties
            memberArticles
            memberPoints
            memberLikes
            memberViews
            memberWarnings
            memberBlocks
            createdAt
            updatedAt
        }
        metaCounter {
            total
        }
    }
}
"#
}

operation! {
    UpdateMemberByAdmin: Mutation "updateMemberByAdmin", Input<MemberUpdate> => Member,
    r#"
mutation UpdateMemberByAdmin($input: MemberUpdate!) {
    updateMemberByAdmin(input: $input) {
        _id
        memberType
        memberStatus
        memberPhone
        memberNick
        memberFullName
        memberImage
        memberAddress
        memberProperties
        memberArticles
        memberPoints
        memberLikes
        memberViews
        memberWarnings
        memberBlocks
        createdAt
        updatedAt
    }
}
"#
}

/* PROPERTIES */

list_query! {
    GetAllPropertiesByAdmin "getAllPropertiesByAdmin" => Property,
    r#"
query GetAllPropertiesByAdmin($input: AllPropertiesInquiry!) {
    getAllPropertiesByAdmin(input: $input) {
        list {
            _id
            propertyType
            propertyStatus
            propertyLocation
            propertyAddress
            propertyTitle
            propertyBrand
            propertyModel
            propertyYear
            propertyMileage
            propertyPrice
            propertyImages
            propertyDesc
            propertyRent
            propertyViews
            propertyLikes
            memberId
            soldAt
            deletedAt
            createdAt
            updatedAt
            memberData {
                _id
                memberNick
                memberFullName
                memberImage
                memberPhone
            }
        }
        metaCounter {
            total
        }
    }
}
"#
}

operation! {
    UpdatePropertyByAdmin: Mutation "updatePropertyByAdmin", Input<PropertyUpdate> => Property,
    r#"
mutation UpdatePropertyByAdmin($input: PropertyUpdate!) {
    updatePropertyByAdmin(input: $input) {
        _id
        propertyType
        propertyStatus
        propertyLocation
        propertyAddress
        propertyTitle
        propertyBrand
        propertyModel
        propertyYear
        propertyMileage
        propertyPrice
        propertyImages
        propertyDesc
        propertyRent
        propertyViews
        propertyLikes
        memberId
        soldAt
        deletedAt
        createdAt
        updatedAt
    }
}
"#
}

operation! {
    RemovePropertyByAdmin: Mutation "removePropertyByAdmin", Input<String> => Property,
    r#"
mutation RemovePropertyByAdmin($input: String!) {
    removePropertyByAdmin(propertyId: $input) {
        _id
        propertyType
        propertyStatus
        propertyLocation
        propertyAddress
        propertyTitle
        propertyBrand
        propertyModel
        propertyYear
        propertyMileage
        propertyPrice
        propertyImages
        propertyDesc
        propertyRent
        propertyViews
        propertyLikes
        memberId
        soldAt
        deletedAt
        createdAt
        updatedAt
    }
}
"#
}

/* BOARD ARTICLES */

list_query! {
    GetAllBoardArticlesByAdmin "getAllBoardArticlesByAdmin" => Article,
    r#"
query GetAllBoardArticlesByAdmin($input: AllBoardArticlesInquiry!) {
    getAllBoardArticlesByAdmin(input: $input) {
        list {
            _id
            articleCategory
            articleStatus
            articleTitle
            articleContent
            articleImage
            articleViews
            articleLikes
            articleComments
            memberId
            createdAt
            updatedAt
            memberData {
                _id
                memberNick
                memberFullName
                memberImage
                memberPhone
            }
        }
        metaCounter {
            total
        }
    }
}
"#
}

operation! {
    UpdateBoardArticleByAdmin: Mutation "updateBoardArticleByAdmin", Input<ArticleUpdate> => Article,
    r#"
mutation UpdateBoardArticleByAdmin($input: BoardArticleUpdate!) {
    updateBoardArticleByAdmin(input: $input) {
        _id
        articleCategory
        articleStatus
        articleTitle
        articleContent
        articleImage
        articleViews
        articleLikes
        articleComments
        memberId
        createdAt
        updatedAt
    }
}
"#
}

operation! {
    RemoveBoardArticleByAdmin: Mutation "removeBoardArticleByAdmin", Input<String> => Article,
    r#"
mutation RemoveBoardArticleByAdmin($input: String!) {
    removeBoardArticleByAdmin(articleId: $input) {
        _id
        articleCategory
        articleStatus
        articleTitle
        articleContent
        articleImage
        articleViews
        articleLikes
        articleComments
        memberId
        createdAt
        updatedAt
    }
}
"#
}

/* COMMENTS */

list_query! {
    GetAllCommentsByAdmin "getAllCommentsByAdmin" => Comment,
    r#"
query GetAllCommentsByAdmin($input: AllCommentsInquiry!) {
    getAllCommentsByAdmin(input: $input) {
        list {
            _id
            commentStatus
            commentGroup
            commentContent
            commentRefId
            memberId
            createdAt
            updatedAt
            memberData {
                _id
                memberNick
                memberFullName
                memberImage
                memberPhone
            }
        }
        metaCounter {
            total
        }
    }
}
"#
}

operation! {
    UpdateCommentByAdmin: Mutation "updateCommentByAdmin", Input<CommentUpdate> => Comment,
    r#"
mutation UpdateCommentByAdmin($input: CommentUpdate!) {
    updateCommentByAdmin(input: $input) {
        _id
        commentStatus
        commentGroup
        commentContent
        commentRefId
        memberId
        createdAt
        updatedAt
    }
}
"#
}

operation! {
    RemoveCommentByAdmin: Mutation "removeCommentByAdmin", Input<String> => Comment,
    r#"
mutation RemoveCommentByAdmin($input: String!) {
    removeCommentByAdmin(commentId: $input) {
        _id
        commentStatus
        commentGroup
        commentContent
        commentRefId
        memberId
        createdAt
        updatedAt
    }
}
"#
}
